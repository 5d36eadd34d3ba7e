//! In-memory resource table
//!
//! A [`ResourceTable`] plays the platform's role off-device: it maps
//! resource names to colors and carries the dynamic color availability
//! flag. Tables can be built in code or loaded from TOML:
//!
//! ```toml
//! available = true
//!
//! [colors]
//! system_accent1_1000 = 0xFF000000
//! system_primary_light = "#FF6750A4"
//! ```

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::color::ColorValue;
use crate::error::{DynamicColorError, Result};
use crate::provider::{AvailabilityCheck, ResourceProvider};
use crate::resource::ResourceId;

fn default_available() -> bool {
    true
}

/// Resource name to color mapping plus an availability flag
#[derive(Clone, Debug, Deserialize)]
pub struct ResourceTable {
    #[serde(default = "default_available")]
    available: bool,
    #[serde(default)]
    colors: FxHashMap<String, ColorValue>,
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceTable {
    /// An empty table that reports dynamic color as available
    pub fn new() -> Self {
        Self {
            available: true,
            colors: FxHashMap::default(),
        }
    }

    /// An empty table for a platform without dynamic color
    pub fn unavailable() -> Self {
        Self {
            available: false,
            colors: FxHashMap::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!(
            "loaded resource table {} ({} colors, available: {})",
            path.display(),
            table.colors.len(),
            table.available
        );
        Ok(table)
    }

    pub fn with_color(mut self, id: ResourceId, color: ColorValue) -> Self {
        self.insert(id, color);
        self
    }

    pub fn insert(&mut self, id: ResourceId, color: ColorValue) -> Option<ColorValue> {
        self.colors.insert(id.name().into_owned(), color)
    }

    pub fn remove(&mut self, id: &ResourceId) -> Option<ColorValue> {
        self.colors.remove(&*id.name())
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Known resources this table does not define
    pub fn missing(&self) -> Vec<ResourceId> {
        ResourceId::all()
            .into_iter()
            .filter(|id| !self.colors.contains_key(&*id.name()))
            .collect()
    }
}

impl ResourceProvider for ResourceTable {
    fn color(&self, id: &ResourceId) -> Result<ColorValue> {
        let name = id.name();
        self.colors
            .get(&*name)
            .copied()
            .ok_or_else(|| DynamicColorError::ResourceUnavailable(name.into_owned()))
    }
}

impl AvailabilityCheck for ResourceTable {
    fn is_dynamic_color_available(&self) -> bool {
        self.available
    }
}

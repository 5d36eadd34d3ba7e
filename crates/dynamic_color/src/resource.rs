//! Platform color resource identifiers

use std::borrow::Cow;
use std::fmt;

use crate::palette::{PaletteFamily, Tone};
use crate::roles::{Brightness, FIXED_ROLES};

/// Identifies one color slot in the platform resource table
///
/// Names follow the platform's `android.R.color` field names, e.g.
/// `system_accent1_500` or `system_on_primary_container_dark`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ResourceId {
    /// A stop on one of the five tonal ramps
    Tonal(PaletteFamily, Tone),
    /// A named color resource
    Named(&'static str),
}

impl ResourceId {
    /// Platform resource name
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            ResourceId::Tonal(family, tone) => {
                Cow::Owned(format!("{}_{}", family.resource_prefix(), tone.value()))
            }
            ResourceId::Named(name) => Cow::Borrowed(name),
        }
    }

    /// Every resource the palette can request, in palette order
    pub fn palette() -> Vec<ResourceId> {
        PaletteFamily::ALL
            .iter()
            .flat_map(|&family| {
                Tone::DESCENDING
                    .iter()
                    .map(move |&tone| ResourceId::Tonal(family, tone))
            })
            .collect()
    }

    /// Every resource the base role table requests for a brightness
    pub fn base_roles(brightness: Brightness) -> Vec<ResourceId> {
        brightness.role_table().iter().map(|(_, id)| *id).collect()
    }

    /// Every resource the fixed role table requests
    pub fn fixed_roles() -> Vec<ResourceId> {
        FIXED_ROLES.iter().map(|(_, id)| *id).collect()
    }

    /// Every distinct resource this crate may request, palette first
    pub fn all() -> Vec<ResourceId> {
        let mut ids = Self::palette();
        let tables = Self::base_roles(Brightness::Light)
            .into_iter()
            .chain(Self::base_roles(Brightness::Dark))
            .chain(Self::fixed_roles());
        for id in tables {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

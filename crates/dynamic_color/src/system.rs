//! System color roles for a brightness mode
//!
//! Base roles are all-or-nothing: if any of them fails to resolve, no
//! color set is produced. Fixed roles only exist on newer platform
//! versions and are merged in as a group when every one of them resolves;
//! otherwise they are left out and the base roles are still returned.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::color::ColorValue;
use crate::error::Result;
use crate::provider::ResourceProvider;
use crate::resource::ResourceId;
use crate::roles::{Brightness, ColorRole, BASE_ROLE_COUNT, FIXED_ROLES, FIXED_ROLE_COUNT};

/// Resolved role colors for one brightness mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemColors {
    brightness: Brightness,
    colors: IndexMap<ColorRole, ColorValue>,
}

impl SystemColors {
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn get(&self, role: ColorRole) -> Option<ColorValue> {
        self.colors.get(&role).copied()
    }

    /// Look up a role by its mapping key (e.g. `"onPrimaryContainer"`)
    pub fn get_by_name(&self, name: &str) -> Option<ColorValue> {
        self.colors
            .iter()
            .find(|(role, _)| role.as_str() == name)
            .map(|(_, color)| *color)
    }

    /// Whether the fixed role group is present
    pub fn has_fixed_roles(&self) -> bool {
        self.colors.len() == BASE_ROLE_COUNT + FIXED_ROLE_COUNT
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, ColorValue)> + '_ {
        self.colors.iter().map(|(role, color)| (*role, *color))
    }
}

impl Serialize for SystemColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (role, color) in &self.colors {
            map.serialize_entry(role.as_str(), color)?;
        }
        map.end()
    }
}

fn resolve_table<P: ResourceProvider + ?Sized>(
    provider: &P,
    table: &[(ColorRole, ResourceId)],
) -> Result<Vec<(ColorRole, ColorValue)>> {
    table
        .iter()
        .map(|(role, id)| provider.color(id).map(|color| (*role, color)))
        .collect()
}

/// Resolve the system color roles for `brightness`
///
/// Returns `None` when any base role is unavailable. The fixed roles are
/// included only when all twelve resolve. Callers go through
/// [`DynamicColorScope`].
///
/// [`DynamicColorScope`]: crate::DynamicColorScope
pub(crate) fn build_system_colors<P: ResourceProvider + ?Sized>(
    provider: &P,
    brightness: Brightness,
) -> Option<SystemColors> {
    let base = match resolve_table(provider, brightness.role_table()) {
        Ok(base) => base,
        Err(err) => {
            tracing::warn!("system colors unavailable for {} mode: {}", brightness, err);
            return None;
        }
    };

    let fixed = resolve_table(provider, &FIXED_ROLES).unwrap_or_else(|err| {
        tracing::debug!("fixed color roles omitted: {}", err);
        Vec::new()
    });

    let mut colors = IndexMap::with_capacity(base.len() + fixed.len());
    colors.extend(base);
    colors.extend(fixed);

    Some(SystemColors { brightness, colors })
}

//! Platform collaborators and the availability-gated entry point
//!
//! Resource lookups that assume dynamic color support are only reachable
//! through a [`DynamicColorScope`], which can only be obtained from a
//! platform whose [`AvailabilityCheck`] passed.

use crate::color::ColorValue;
use crate::error::Result;
use crate::palette::{build_core_palette, CorePalette};
use crate::resource::ResourceId;
use crate::roles::Brightness;
use crate::system::{build_system_colors, SystemColors};

/// Resolves platform color resources
pub trait ResourceProvider {
    /// Look up one color resource
    ///
    /// Returns [`DynamicColorError::ResourceUnavailable`] when the resource
    /// does not exist on the running platform version.
    ///
    /// [`DynamicColorError::ResourceUnavailable`]: crate::DynamicColorError::ResourceUnavailable
    fn color(&self, id: &ResourceId) -> Result<ColorValue>;
}

/// Reports whether the platform supports dynamic color at all
pub trait AvailabilityCheck {
    fn is_dynamic_color_available(&self) -> bool;
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for &T {
    fn color(&self, id: &ResourceId) -> Result<ColorValue> {
        (**self).color(id)
    }
}

impl<T: AvailabilityCheck + ?Sized> AvailabilityCheck for &T {
    fn is_dynamic_color_available(&self) -> bool {
        (**self).is_dynamic_color_available()
    }
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for Box<T> {
    fn color(&self, id: &ResourceId) -> Result<ColorValue> {
        (**self).color(id)
    }
}

impl<T: AvailabilityCheck + ?Sized> AvailabilityCheck for Box<T> {
    fn is_dynamic_color_available(&self) -> bool {
        (**self).is_dynamic_color_available()
    }
}

/// Proof that dynamic color is available on a platform
#[derive(Debug)]
pub struct DynamicColorScope<'a, P: ?Sized> {
    platform: &'a P,
}

impl<'a, P> DynamicColorScope<'a, P>
where
    P: ResourceProvider + AvailabilityCheck + ?Sized,
{
    /// Run the availability check; `None` when dynamic color is unsupported
    pub fn check(platform: &'a P) -> Option<Self> {
        if platform.is_dynamic_color_available() {
            Some(Self { platform })
        } else {
            tracing::debug!("dynamic color unavailable on this platform");
            None
        }
    }

    pub fn core_palette(&self) -> Result<CorePalette> {
        build_core_palette(self.platform)
    }

    pub fn system_colors(&self, brightness: Brightness) -> Option<SystemColors> {
        build_system_colors(self.platform, brightness)
    }
}

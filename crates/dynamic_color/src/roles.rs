//! Semantic color roles and their platform resource tables

use std::fmt;

use crate::palette::{PaletteFamily, Tone};
use crate::resource::ResourceId;

/// Brightness mode a system color set is resolved for
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Brightness {
    #[default]
    Light,
    Dark,
}

impl Brightness {
    /// Interpret a caller-supplied brightness argument
    ///
    /// Only the exact string `"dark"` selects [`Brightness::Dark`]; anything
    /// else, including a missing argument, is light.
    pub fn from_argument(argument: Option<&str>) -> Self {
        match argument {
            Some("dark") => Brightness::Dark,
            _ => Brightness::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Brightness::Light => "light",
            Brightness::Dark => "dark",
        }
    }

    /// Base role table for this brightness
    pub fn role_table(self) -> &'static [(ColorRole, ResourceId); BASE_ROLE_COUNT] {
        match self {
            Brightness::Light => &LIGHT_ROLES,
            Brightness::Dark => &DARK_ROLES,
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic color role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorRole {
    // Primary
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,

    // Secondary
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,

    // Tertiary
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,

    // Error
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,

    // Surface
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    SurfaceBright,
    SurfaceDim,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    SurfaceContainerLow,
    SurfaceContainerLowest,

    // Background
    Background,
    OnBackground,

    // Inverse
    InverseSurface,
    OnInverseSurface,
    InversePrimary,

    // Outline
    Outline,
    OutlineVariant,

    // Shadow and scrim
    Shadow,
    Scrim,

    SurfaceTint,

    // Fixed (same in light and dark)
    PrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixed,
    OnPrimaryFixedVariant,
    SecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixed,
    OnSecondaryFixedVariant,
    TertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixed,
    OnTertiaryFixedVariant,
}

impl ColorRole {
    /// Key used for this role in the system colors mapping
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::OnPrimary => "onPrimary",
            ColorRole::PrimaryContainer => "primaryContainer",
            ColorRole::OnPrimaryContainer => "onPrimaryContainer",
            ColorRole::Secondary => "secondary",
            ColorRole::OnSecondary => "onSecondary",
            ColorRole::SecondaryContainer => "secondaryContainer",
            ColorRole::OnSecondaryContainer => "onSecondaryContainer",
            ColorRole::Tertiary => "tertiary",
            ColorRole::OnTertiary => "onTertiary",
            ColorRole::TertiaryContainer => "tertiaryContainer",
            ColorRole::OnTertiaryContainer => "onTertiaryContainer",
            ColorRole::Error => "error",
            ColorRole::OnError => "onError",
            ColorRole::ErrorContainer => "errorContainer",
            ColorRole::OnErrorContainer => "onErrorContainer",
            ColorRole::Surface => "surface",
            ColorRole::OnSurface => "onSurface",
            ColorRole::SurfaceVariant => "surfaceVariant",
            ColorRole::OnSurfaceVariant => "onSurfaceVariant",
            ColorRole::SurfaceBright => "surfaceBright",
            ColorRole::SurfaceDim => "surfaceDim",
            ColorRole::SurfaceContainer => "surfaceContainer",
            ColorRole::SurfaceContainerHigh => "surfaceContainerHigh",
            ColorRole::SurfaceContainerHighest => "surfaceContainerHighest",
            ColorRole::SurfaceContainerLow => "surfaceContainerLow",
            ColorRole::SurfaceContainerLowest => "surfaceContainerLowest",
            ColorRole::Background => "background",
            ColorRole::OnBackground => "onBackground",
            ColorRole::InverseSurface => "inverseSurface",
            ColorRole::OnInverseSurface => "onInverseSurface",
            ColorRole::InversePrimary => "inversePrimary",
            ColorRole::Outline => "outline",
            ColorRole::OutlineVariant => "outlineVariant",
            ColorRole::Shadow => "shadow",
            ColorRole::Scrim => "scrim",
            ColorRole::SurfaceTint => "surfaceTint",
            ColorRole::PrimaryFixed => "primaryFixed",
            ColorRole::PrimaryFixedDim => "primaryFixedDim",
            ColorRole::OnPrimaryFixed => "onPrimaryFixed",
            ColorRole::OnPrimaryFixedVariant => "onPrimaryFixedVariant",
            ColorRole::SecondaryFixed => "secondaryFixed",
            ColorRole::SecondaryFixedDim => "secondaryFixedDim",
            ColorRole::OnSecondaryFixed => "onSecondaryFixed",
            ColorRole::OnSecondaryFixedVariant => "onSecondaryFixedVariant",
            ColorRole::TertiaryFixed => "tertiaryFixed",
            ColorRole::TertiaryFixedDim => "tertiaryFixedDim",
            ColorRole::OnTertiaryFixed => "onTertiaryFixed",
            ColorRole::OnTertiaryFixedVariant => "onTertiaryFixedVariant",
        }
    }

    /// Whether this role belongs to the fixed group
    pub fn is_fixed(self) -> bool {
        FIXED_ROLES.iter().any(|(role, _)| *role == self)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const BASE_ROLE_COUNT: usize = 37;
pub const FIXED_ROLE_COUNT: usize = 12;

const SHADOW: ResourceId = ResourceId::Tonal(PaletteFamily::Neutral, Tone::T1000);

const fn named(name: &'static str) -> ResourceId {
    ResourceId::Named(name)
}

/// Light base roles. Inverse roles point at dark resources.
pub static LIGHT_ROLES: [(ColorRole, ResourceId); BASE_ROLE_COUNT] = [
    (ColorRole::Primary, named("system_primary_light")),
    (ColorRole::OnPrimary, named("system_on_primary_light")),
    (ColorRole::PrimaryContainer, named("system_primary_container_light")),
    (ColorRole::OnPrimaryContainer, named("system_on_primary_container_light")),
    (ColorRole::Secondary, named("system_secondary_light")),
    (ColorRole::OnSecondary, named("system_on_secondary_light")),
    (ColorRole::SecondaryContainer, named("system_secondary_container_light")),
    (ColorRole::OnSecondaryContainer, named("system_on_secondary_container_light")),
    (ColorRole::Tertiary, named("system_tertiary_light")),
    (ColorRole::OnTertiary, named("system_on_tertiary_light")),
    (ColorRole::TertiaryContainer, named("system_tertiary_container_light")),
    (ColorRole::OnTertiaryContainer, named("system_on_tertiary_container_light")),
    (ColorRole::Error, named("system_error_light")),
    (ColorRole::OnError, named("system_on_error_light")),
    (ColorRole::ErrorContainer, named("system_error_container_light")),
    (ColorRole::OnErrorContainer, named("system_on_error_container_light")),
    (ColorRole::Surface, named("system_surface_light")),
    (ColorRole::OnSurface, named("system_on_surface_light")),
    (ColorRole::SurfaceVariant, named("system_surface_variant_light")),
    (ColorRole::OnSurfaceVariant, named("system_on_surface_variant_light")),
    (ColorRole::SurfaceBright, named("system_surface_bright_light")),
    (ColorRole::SurfaceDim, named("system_surface_dim_light")),
    (ColorRole::SurfaceContainer, named("system_surface_container_light")),
    (ColorRole::SurfaceContainerHigh, named("system_surface_container_high_light")),
    (ColorRole::SurfaceContainerHighest, named("system_surface_container_highest_light")),
    (ColorRole::SurfaceContainerLow, named("system_surface_container_low_light")),
    (ColorRole::SurfaceContainerLowest, named("system_surface_container_lowest_light")),
    (ColorRole::Background, named("system_background_light")),
    (ColorRole::OnBackground, named("system_on_background_light")),
    (ColorRole::InverseSurface, named("system_surface_dark")),
    (ColorRole::OnInverseSurface, named("system_on_surface_dark")),
    (ColorRole::InversePrimary, named("system_primary_dark")),
    (ColorRole::Outline, named("system_outline_light")),
    (ColorRole::OutlineVariant, named("system_outline_variant_light")),
    (ColorRole::Shadow, SHADOW),
    (ColorRole::Scrim, SHADOW),
    (ColorRole::SurfaceTint, named("system_primary_light")),
];

/// Dark base roles. Inverse roles point at light resources.
pub static DARK_ROLES: [(ColorRole, ResourceId); BASE_ROLE_COUNT] = [
    (ColorRole::Primary, named("system_primary_dark")),
    (ColorRole::OnPrimary, named("system_on_primary_dark")),
    (ColorRole::PrimaryContainer, named("system_primary_container_dark")),
    (ColorRole::OnPrimaryContainer, named("system_on_primary_container_dark")),
    (ColorRole::Secondary, named("system_secondary_dark")),
    (ColorRole::OnSecondary, named("system_on_secondary_dark")),
    (ColorRole::SecondaryContainer, named("system_secondary_container_dark")),
    (ColorRole::OnSecondaryContainer, named("system_on_secondary_container_dark")),
    (ColorRole::Tertiary, named("system_tertiary_dark")),
    (ColorRole::OnTertiary, named("system_on_tertiary_dark")),
    (ColorRole::TertiaryContainer, named("system_tertiary_container_dark")),
    (ColorRole::OnTertiaryContainer, named("system_on_tertiary_container_dark")),
    (ColorRole::Error, named("system_error_dark")),
    (ColorRole::OnError, named("system_on_error_dark")),
    (ColorRole::ErrorContainer, named("system_error_container_dark")),
    (ColorRole::OnErrorContainer, named("system_on_error_container_dark")),
    (ColorRole::Surface, named("system_surface_dark")),
    (ColorRole::OnSurface, named("system_on_surface_dark")),
    (ColorRole::SurfaceVariant, named("system_surface_variant_dark")),
    (ColorRole::OnSurfaceVariant, named("system_on_surface_variant_dark")),
    (ColorRole::SurfaceBright, named("system_surface_bright_dark")),
    (ColorRole::SurfaceDim, named("system_surface_dim_dark")),
    (ColorRole::SurfaceContainer, named("system_surface_container_dark")),
    (ColorRole::SurfaceContainerHigh, named("system_surface_container_high_dark")),
    (ColorRole::SurfaceContainerHighest, named("system_surface_container_highest_dark")),
    (ColorRole::SurfaceContainerLow, named("system_surface_container_low_dark")),
    (ColorRole::SurfaceContainerLowest, named("system_surface_container_lowest_dark")),
    (ColorRole::Background, named("system_background_dark")),
    (ColorRole::OnBackground, named("system_on_background_dark")),
    (ColorRole::InverseSurface, named("system_surface_light")),
    (ColorRole::OnInverseSurface, named("system_on_surface_light")),
    (ColorRole::InversePrimary, named("system_primary_light")),
    (ColorRole::Outline, named("system_outline_dark")),
    (ColorRole::OutlineVariant, named("system_outline_variant_dark")),
    (ColorRole::Shadow, SHADOW),
    (ColorRole::Scrim, SHADOW),
    (ColorRole::SurfaceTint, named("system_primary_dark")),
];

/// Fixed roles, only present on newer platform versions
pub static FIXED_ROLES: [(ColorRole, ResourceId); FIXED_ROLE_COUNT] = [
    (ColorRole::PrimaryFixed, named("system_primary_fixed")),
    (ColorRole::PrimaryFixedDim, named("system_primary_fixed_dim")),
    (ColorRole::OnPrimaryFixed, named("system_on_primary_fixed")),
    (ColorRole::OnPrimaryFixedVariant, named("system_on_primary_fixed_variant")),
    (ColorRole::SecondaryFixed, named("system_secondary_fixed")),
    (ColorRole::SecondaryFixedDim, named("system_secondary_fixed_dim")),
    (ColorRole::OnSecondaryFixed, named("system_on_secondary_fixed")),
    (ColorRole::OnSecondaryFixedVariant, named("system_on_secondary_fixed_variant")),
    (ColorRole::TertiaryFixed, named("system_tertiary_fixed")),
    (ColorRole::TertiaryFixedDim, named("system_tertiary_fixed_dim")),
    (ColorRole::OnTertiaryFixed, named("system_on_tertiary_fixed")),
    (ColorRole::OnTertiaryFixedVariant, named("system_on_tertiary_fixed_variant")),
];

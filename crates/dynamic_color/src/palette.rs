//! Core tonal palette
//!
//! The platform exposes five tonal ramps (primary, secondary, tertiary,
//! neutral, neutral variant), each with 13 fixed tone stops. The core
//! palette is those ramps concatenated in family order, every ramp emitted
//! from tone 1000 down to tone 0.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::color::ColorValue;
use crate::error::{DynamicColorError, Result};
use crate::provider::ResourceProvider;
use crate::resource::ResourceId;

/// Tonal palette families, in core palette order
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PaletteFamily {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
}

impl PaletteFamily {
    /// All families in the order they appear in the core palette
    pub const ALL: [PaletteFamily; 5] = [
        PaletteFamily::Primary,
        PaletteFamily::Secondary,
        PaletteFamily::Tertiary,
        PaletteFamily::Neutral,
        PaletteFamily::NeutralVariant,
    ];

    /// Platform resource name prefix for this family's ramp
    pub const fn resource_prefix(self) -> &'static str {
        match self {
            PaletteFamily::Primary => "system_accent1",
            PaletteFamily::Secondary => "system_accent2",
            PaletteFamily::Tertiary => "system_accent3",
            PaletteFamily::Neutral => "system_neutral1",
            PaletteFamily::NeutralVariant => "system_neutral2",
        }
    }

    /// Position of this family in the core palette
    pub const fn index(self) -> usize {
        match self {
            PaletteFamily::Primary => 0,
            PaletteFamily::Secondary => 1,
            PaletteFamily::Tertiary => 2,
            PaletteFamily::Neutral => 3,
            PaletteFamily::NeutralVariant => 4,
        }
    }
}

/// Tone stops of a tonal ramp
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Tone {
    T1000,
    T900,
    T800,
    T700,
    T600,
    T500,
    T400,
    T300,
    T200,
    T100,
    T50,
    T10,
    T0,
}

impl Tone {
    /// Tone stops in ramp order (descending)
    pub const DESCENDING: [Tone; 13] = [
        Tone::T1000,
        Tone::T900,
        Tone::T800,
        Tone::T700,
        Tone::T600,
        Tone::T500,
        Tone::T400,
        Tone::T300,
        Tone::T200,
        Tone::T100,
        Tone::T50,
        Tone::T10,
        Tone::T0,
    ];

    pub const fn value(self) -> u16 {
        match self {
            Tone::T1000 => 1000,
            Tone::T900 => 900,
            Tone::T800 => 800,
            Tone::T700 => 700,
            Tone::T600 => 600,
            Tone::T500 => 500,
            Tone::T400 => 400,
            Tone::T300 => 300,
            Tone::T200 => 200,
            Tone::T100 => 100,
            Tone::T50 => 50,
            Tone::T10 => 10,
            Tone::T0 => 0,
        }
    }

    /// Position of this stop within a ramp
    pub const fn index(self) -> usize {
        match self {
            Tone::T1000 => 0,
            Tone::T900 => 1,
            Tone::T800 => 2,
            Tone::T700 => 3,
            Tone::T600 => 4,
            Tone::T500 => 5,
            Tone::T400 => 6,
            Tone::T300 => 7,
            Tone::T200 => 8,
            Tone::T100 => 9,
            Tone::T50 => 10,
            Tone::T10 => 11,
            Tone::T0 => 12,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The five tonal ramps flattened into a single 65-entry sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorePalette {
    colors: Vec<ColorValue>,
}

impl CorePalette {
    /// Entries per tonal ramp
    pub const RAMP_LEN: usize = Tone::DESCENDING.len();

    /// Total number of entries
    pub const LEN: usize = PaletteFamily::ALL.len() * Self::RAMP_LEN;

    /// The ramp for one family, tone-descending
    pub fn ramp(&self, family: PaletteFamily) -> &[ColorValue] {
        let start = family.index() * Self::RAMP_LEN;
        &self.colors[start..start + Self::RAMP_LEN]
    }

    pub fn get(&self, family: PaletteFamily, tone: Tone) -> ColorValue {
        self.ramp(family)[tone.index()]
    }

    pub fn as_slice(&self) -> &[ColorValue] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Serialize for CorePalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.colors.serialize(serializer)
    }
}

/// Resolve every tonal stop into a [`CorePalette`]
///
/// Any stop that fails to resolve fails the whole palette; a partial
/// palette is never returned. Callers go through [`DynamicColorScope`].
///
/// [`DynamicColorScope`]: crate::DynamicColorScope
pub(crate) fn build_core_palette<P: ResourceProvider + ?Sized>(
    provider: &P,
) -> Result<CorePalette> {
    let mut colors = Vec::with_capacity(CorePalette::LEN);

    for family in PaletteFamily::ALL {
        for tone in Tone::DESCENDING {
            let color = provider
                .color(&ResourceId::Tonal(family, tone))
                .map_err(|err| {
                    tracing::debug!("palette stop {:?}/{} failed: {}", family, tone, err);
                    DynamicColorError::PaletteUnavailable { family, tone }
                })?;
            colors.push(color);
        }
    }

    debug_assert_eq!(colors.len(), CorePalette::LEN);
    Ok(CorePalette { colors })
}

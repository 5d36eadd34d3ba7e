//! 32-bit ARGB color values as handed out by the platform

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DynamicColorError;

/// A packed ARGB color
///
/// The platform represents colors as signed 32-bit ints, so values
/// serialize through [`ColorValue::to_signed`]. Deserialization accepts
/// either integer form as well as `#AARRGGBB` / `#RRGGBB` strings.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ColorValue(u32);

impl ColorValue {
    pub const BLACK: ColorValue = ColorValue(0xFF00_0000);
    pub const WHITE: ColorValue = ColorValue(0xFFFF_FFFF);

    /// Create from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create from the platform's signed int representation
    pub const fn from_signed(value: i32) -> Self {
        Self(value as u32)
    }

    /// Create from individual channels
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn to_signed(self) -> i32 {
        self.0 as i32
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse `#AARRGGBB` or `#RRGGBB` (opaque). The leading `#` is optional.
    pub fn parse_hex(input: &str) -> Result<Self, DynamicColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || DynamicColorError::InvalidColor(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            8 => Ok(Self(value)),
            6 => Ok(Self(0xFF00_0000 | value)),
            _ => Err(invalid()),
        }
    }

    /// Accept any integer that fits either the signed or unsigned 32-bit range
    pub fn from_integer(value: i64) -> Result<Self, DynamicColorError> {
        if let Ok(signed) = i32::try_from(value) {
            return Ok(Self::from_signed(signed));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DynamicColorError::InvalidColor(value.to_string()))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.to_signed())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Integer(i64),
    Hex(String),
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawColor::deserialize(deserializer)? {
            RawColor::Integer(value) => ColorValue::from_integer(value),
            RawColor::Hex(text) => ColorValue::parse_hex(&text),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

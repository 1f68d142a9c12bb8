//! PackedColor - 24-bit RGB value type
//!
//! Colors are packed as `0x00RRGGBB` (red in the high byte). This is the
//! key type of a [`Histogram`](crate::Histogram) and the representative
//! color of every descriptor cluster.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

/// Largest valid packed value (white)
pub const MAX_PACKED: u32 = 0x00ff_ffff;

/// A 24-bit RGB color packed as `0x00RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(MAX_PACKED);

    /// Create a packed color from its integer value.
    ///
    /// Returns [`Error::InvalidColor`] if any bit above the blue, green and
    /// red bytes is set.
    pub fn new(value: u32) -> Result<Self> {
        if value > MAX_PACKED {
            return Err(Error::InvalidColor(value));
        }
        Ok(Self(value))
    }

    /// Compose a packed color from its channels.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << RED_SHIFT) | ((green as u32) << GREEN_SHIFT) | blue as u32)
    }

    /// The raw `0x00RRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> RED_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> GREEN_SHIFT) & 0xff) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        ((self.0 >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Split into `(red, green, blue)`.
    #[inline]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Format as six upper-case hex digits, optionally prefixed with `#`.
    pub fn to_hex(self, prepend_hash: bool) -> String {
        if prepend_hash {
            format!("#{:06X}", self.0)
        } else {
            format!("{:06X}", self.0)
        }
    }

    /// Parse a hex color such as `#FF8800`, `ff8800` or `#fff`.
    ///
    /// The digits are read as one integer, so `"fff"` is `0x000FFF`, not a
    /// CSS shorthand.
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.is_empty()
            || digits.len() > 6
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidHex(text.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex(text.to_string()))?;
        Ok(Self(value))
    }
}

impl TryFrom<u32> for PackedColor {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> u32 {
        color.0
    }
}

impl From<(u8, u8, u8)> for PackedColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for PackedColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

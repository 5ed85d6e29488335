//! Backlight color
//!
//! This module defines the [`Rgb`] backlight color and the mapping of each
//! channel onto the brightness sub-ranges of the OpenLCD firmware.
//!
//! ## Backlight Ranges
//!
//! The slow backlight path sends one setting command per channel, each from
//! its own 30-step range:
//!
//! | Channel | Off | 100% |
//! |---------|-----|------|
//! | Red     | 128 | 157  |
//! | Green   | 158 | 187  |
//! | Blue    | 188 | 217  |
//!
//! ## Example
//!
//! ```
//! use serlcd::Rgb;
//!
//! let orange = Rgb::from_u24(0xFF8000);
//! assert_eq!(orange, Rgb::new(0xFF, 0x80, 0x00));
//!
//! assert_eq!(Rgb::new(0, 0, 0).backlight_levels(), [128, 158, 188]);
//! assert_eq!(Rgb::new(255, 255, 255).backlight_levels(), [157, 187, 217]);
//! ```

use crate::command::{
    BACKLIGHT_BLUE_BASE, BACKLIGHT_GREEN_BASE, BACKLIGHT_RED_BASE, BACKLIGHT_STEPS,
};

/// 24-bit backlight color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Backlight off
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Full white
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Full red
    pub const RED: Self = Self::new(255, 0, 0);
    /// Full green
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Full blue
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` value
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_u24(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Pack into a `0xRRGGBB` value
    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Setting codes for the per-channel backlight commands
    ///
    /// Returns `[red, green, blue]` mapped into 128..=157, 158..=187 and
    /// 188..=217.
    pub fn backlight_levels(self) -> [u8; 3] {
        [
            BACKLIGHT_RED_BASE + scale_channel(self.r),
            BACKLIGHT_GREEN_BASE + scale_channel(self.g),
            BACKLIGHT_BLUE_BASE + scale_channel(self.b),
        ]
    }
}

impl From<u32> for Rgb {
    fn from(rgb: u32) -> Self {
        Self::from_u24(rgb)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Map 0..=255 onto 0..=BACKLIGHT_STEPS, truncating
fn scale_channel(value: u8) -> u8 {
    (u16::from(value) * u16::from(BACKLIGHT_STEPS) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u24_splits_channels() {
        let c = Rgb::from_u24(0x12_34_56);
        assert_eq!(c, Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(c.to_u24(), 0x12_34_56);
    }

    #[test]
    fn test_from_u24_ignores_high_byte() {
        assert_eq!(Rgb::from(0xFF_00_00_FFu32), Rgb::BLUE);
    }

    #[test]
    fn test_backlight_levels_bounds() {
        assert_eq!(Rgb::BLACK.backlight_levels(), [128, 158, 188]);
        assert_eq!(Rgb::WHITE.backlight_levels(), [157, 187, 217]);
    }

    #[test]
    fn test_backlight_levels_truncate() {
        // 128 * 29 / 255 = 14.55..
        assert_eq!(Rgb::new(128, 0, 255).backlight_levels(), [142, 158, 217]);
        // 9 * 29 / 255 = 1.02..
        assert_eq!(Rgb::new(8, 9, 0).backlight_levels(), [128, 159, 188]);
    }
}

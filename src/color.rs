//! Colors carried by scene primitives.
//!
//! The scene never references a rendering API, so colors are literal
//! 8-bit channels. Stroke and fill opacity live on
//! [`Style`](crate::scene::Style).

use serde::{Deserialize, Serialize};

/// Opaque-or-translucent color as four 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// `#000000`, axes and text.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `#ffffff`, violin medians.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// `#4682b4`, the default mark fill.
    pub const STEELBLUE: Self = Self::rgb(70, 130, 180);
    /// `#ff8c00`, scatter points and cumulative lines.
    pub const DARKORANGE: Self = Self::rgb(255, 140, 0);
    /// `#add8e6`, area fill.
    pub const LIGHTBLUE: Self = Self::rgb(173, 216, 230);
    /// `#d3d3d3`, dot plot guides.
    pub const LIGHTGRAY: Self = Self::rgb(211, 211, 211);
    /// `#808080`, lollipop stems.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// `#dc143c`, reference and mean lines.
    pub const CRIMSON: Self = Self::rgb(220, 20, 60);

    /// Fully opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }
}

/// d3's `schemeCategory10`, cycled by the ordinal color scale.
pub const CATEGORY10: [Rgba; 10] = [
    Rgba::rgb(0x1f, 0x77, 0xb4),
    Rgba::rgb(0xff, 0x7f, 0x0e),
    Rgba::rgb(0x2c, 0xa0, 0x2c),
    Rgba::rgb(0xd6, 0x27, 0x28),
    Rgba::rgb(0x94, 0x67, 0xbd),
    Rgba::rgb(0x8c, 0x56, 0x4b),
    Rgba::rgb(0xe3, 0x77, 0xc2),
    Rgba::rgb(0x7f, 0x7f, 0x7f),
    Rgba::rgb(0xbc, 0xbd, 0x22),
    Rgba::rgb(0x17, 0xbe, 0xcf),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Rgba::BLACK, Rgba { r: 0, g: 0, b: 0, a: 255 });
        assert_eq!(Rgba::STEELBLUE, Rgba { r: 0x46, g: 0x82, b: 0xb4, a: 255 });
        assert_eq!(Rgba::DARKORANGE, Rgba { r: 0xff, g: 0x8c, b: 0x00, a: 255 });
        assert_eq!(Rgba::CRIMSON, Rgba { r: 0xdc, g: 0x14, b: 0x3c, a: 255 });
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Rgba::WHITE.a, u8::MAX);
        assert_ne!(Rgba { a: 10, ..Rgba::STEELBLUE }, Rgba::STEELBLUE);
    }

    #[test]
    fn test_category10_ends() {
        assert_eq!(CATEGORY10[0], Rgba::rgb(0x1f, 0x77, 0xb4));
        assert_eq!(CATEGORY10[9], Rgba::rgb(0x17, 0xbe, 0xcf));
    }
}

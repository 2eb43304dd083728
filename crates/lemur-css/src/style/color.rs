//! CSS Color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// sRGB color: three 0-255 channels plus an alpha in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0.0 = transparent, 1.0 = fully opaque)
    pub a: f32,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 1.0 };

    /// White (#ffffff)
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 1.0 };

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0.0 };

    /// Create a color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The syntax of a <hex-color> is a <hash-token> token whose value
    /// consists of 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        // "The three-digit RGB notation (#RGB) is converted into six-digit
        // form (#RRGGBB) by replicating digits, not by adding zeros."
        let short_channel = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
        let long_channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self {
                r: short_channel(0)?,
                g: short_channel(1)?,
                b: short_channel(2)?,
                a: 1.0,
            }),
            4 => Some(Self {
                r: short_channel(0)?,
                g: short_channel(1)?,
                b: short_channel(2)?,
                a: f32::from(short_channel(3)?) / 255.0,
            }),
            6 => Some(Self {
                r: long_channel(0)?,
                g: long_channel(2)?,
                b: long_channel(4)?,
                a: 1.0,
            }),
            8 => Some(Self {
                r: long_channel(0)?,
                g: long_channel(2)?,
                b: long_channel(4)?,
                a: f32::from(long_channel(6)?) / 255.0,
            }),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// Basic named colors; unrecognized names yield `None`.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "transparent" => Some(Self::TRANSPARENT),
            "red" => Some(Self::new(255, 0, 0, 1.0)),
            "green" => Some(Self::new(0, 128, 0, 1.0)),
            "blue" => Some(Self::new(0, 0, 255, 1.0)),
            "yellow" => Some(Self::new(255, 255, 0, 1.0)),
            "gray" | "grey" => Some(Self::new(128, 128, 128, 1.0)),
            _ => None,
        }
    }

    /// The color as four 0-255 bytes `[r, g, b, a]`, with alpha scaled to
    /// the byte range. Rasterizer-facing convenience.
    #[must_use]
    pub fn to_rgba8(&self) -> [u8; 4] {
        let alpha = (self.a * 255.0).round().clamp(0.0, 255.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let alpha = alpha as u8;
        [self.r, self.g, self.b, alpha]
    }
}

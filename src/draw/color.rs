//! RGB color type and the reserved palette used on the wire.

use std::fmt;

/// Represents a color exactly as it is sent to the canvas.
///
/// The canvas protocol carries no alpha channel, so a color is the plain
/// byte triple written on the wire. Equality and hashing compare all three
/// channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reads the color channels out of one ARgb32 surface word.
    ///
    /// The alpha byte is dropped; the raster surface is fully opaque once
    /// the sentinel fill has run.
    pub fn from_surface_word(word: u32) -> Self {
        Self {
            r: ((word >> 16) & 0xff) as u8,
            g: ((word >> 8) & 0xff) as u8,
            b: (word & 0xff) as u8,
        }
    }
}

/// Formats the color in the lowercase `rrggbb` form the wire protocol uses.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Glyph ink color.
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

/// Clearing fill color.
pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

/// Reserved sentinel marking "no ink here" on the raster surface.
///
/// Never appears in an emitted pixel set; the rasterizer filters it out
/// while scanning the surface.
pub const CYAN: Color = Color {
    r: 0,
    g: 255,
    b: 255,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(WHITE.to_string(), "ffffff");
        assert_eq!(BLACK.to_string(), "000000");
        assert_eq!(CYAN.to_string(), "00ffff");
        assert_eq!(Color::new(0x12, 0xab, 0x03).to_string(), "12ab03");
    }

    #[test]
    fn from_surface_word_reads_argb_channels() {
        assert_eq!(Color::from_surface_word(0xff00ffff), CYAN);
        assert_eq!(Color::from_surface_word(0xffffffff), WHITE);
        assert_eq!(Color::from_surface_word(0x00123456), Color::new(0x12, 0x34, 0x56));
    }
}

use plotters::style::RGBColor;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self { r: 0xff, g: 0xff, b: 0xff };
    pub const BLUE:  Self = Self { r: 0x1f, g: 0x77, b: 0xb4 }; // #1f77b4
    pub const ORANGE: Self = Self { r: 0xff, g: 0x7f, b: 0x0e }; // #ff7f0e

    /// Parse a CSS-style hex color string (`#RRGGBB`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        Some(Self {
            r: byte(&hex[0..2])?,
            g: byte(&hex[2..4])?,
            b: byte(&hex[4..6])?,
        })
    }

    /// Convert to a plotters colour.
    #[inline]
    pub fn to_rgb(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Color::from_hex("#1f77b4"), Some(Color::BLUE));
        assert_eq!(Color::from_hex("ffffff"), Some(Color::WHITE));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#1f77b4ff"), None);
    }
}

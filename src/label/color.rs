use std::str::FromStr;

use crate::error::ColorError;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::new(r, g, b, a)
    }

    /// Packs the color as `0xAARRGGBB`.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Formats the color as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `[0, 1]`.
    #[must_use]
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    fn named(name: &str) -> Option<Self> {
        let argb = match name {
            "black" => 0xFF00_0000,
            "darkgray" | "darkgrey" => 0xFF44_4444,
            "gray" | "grey" => 0xFF88_8888,
            "lightgray" | "lightgrey" => 0xFFCC_CCCC,
            "white" => 0xFFFF_FFFF,
            "red" => 0xFFFF_0000,
            "green" => 0xFF00_FF00,
            "blue" => 0xFF00_00FF,
            "yellow" => 0xFFFF_FF00,
            "cyan" | "aqua" => 0xFF00_FFFF,
            "magenta" | "fuchsia" => 0xFFFF_00FF,
            "transparent" => 0x0000_0000,
            _ => return None,
        };
        Some(Self::from_argb(argb))
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// Parses `#rrggbb`, `#aarrggbb` or a color name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let invalid = || ColorError::InvalidHex(s.to_owned());
            if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            let argb = if hex.len() == 6 { 0xFF00_0000 | value } else { value };
            return Ok(Self::from_argb(argb));
        }
        Self::named(&s.to_ascii_lowercase()).ok_or_else(|| ColorError::Unknown(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn argb_round_trip() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb(), 0x7812_3456);
        assert_eq!(Rgba::from_argb(0x7812_3456), c);
    }

    #[test]
    fn parses_rgb_hex_as_opaque() {
        assert_eq!("#ff8000".parse::<Rgba>().unwrap(), Rgba::rgb(255, 128, 0));
    }

    #[test]
    fn parses_argb_hex() {
        assert_eq!(
            "#80FF0000".parse::<Rgba>().unwrap(),
            Rgba::new(255, 0, 0, 0x80)
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Red".parse::<Rgba>().unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!("BLUE".parse::<Rgba>().unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!("yellow".parse::<Rgba>().unwrap(), Rgba::rgb(255, 255, 0));
        assert_eq!("transparent".parse::<Rgba>().unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(
            "#12345".parse::<Rgba>(),
            Err(ColorError::InvalidHex("#12345".to_owned()))
        );
        assert!(matches!("#zzzzzz".parse::<Rgba>(), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn rejects_unknown_name() {
        assert_eq!(
            "chartreuse".parse::<Rgba>(),
            Err(ColorError::Unknown("chartreuse".to_owned()))
        );
    }

    #[test]
    fn hex_output_drops_alpha() {
        assert_eq!(Rgba::new(1, 2, 255, 9).to_hex_rgb(), "#0102ff");
    }
}

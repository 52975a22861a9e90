//! Hexadecimal color strings (`#rrggbb`).
//!
//! [`Hex`] stores the color packed as a 24-bit integer: red in bits 16–23,
//! green in bits 8–15, blue in bits 0–7. The canonical text form is
//! lowercase; [`Hex::to_upper`] gives the uppercase display variant.

use crate::error::ColorError;
use crate::model::Rgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color as written in hex.
///
/// Serializes as the lowercase string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex(u32);

impl Hex {
    /// Returns the packed `0xRRGGBB` value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Formats as `"#RRGGBB"` with uppercase hexits.
    pub fn to_upper(self) -> String {
        format!("#{:06X}", self.value())
    }
}

impl From<Rgb> for Hex {
    /// Rounds and clamps each channel to [0, 255] before packing.
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_u8();
        Hex((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }
}

impl From<Hex> for Rgb {
    fn from(hex: Hex) -> Self {
        let packed = hex.value();
        let r = (packed >> 16) & 0xff;
        let g = (packed >> 8) & 0xff;
        let b = packed & 0xff;
        Rgb::new(r as f64, g as f64, b as f64)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.value())
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    /// Parses `"#rrggbb"` or `"rrggbb"`, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorError::InvalidHex(format!(
                "expected 6 hex digits, got {}",
                digits.len()
            )));
        }
        // from_str_radix alone would also accept a leading '+'.
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(format!(
                "'{bad}' is not a hex digit in {s:?}"
            )));
        }
        u32::from_str_radix(digits, 16)
            .map(Hex)
            .map_err(|e| ColorError::InvalidHex(e.to_string()))
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Formats an RGB color as lowercase `"#rrggbb"`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    Hex::from(rgb).to_string()
}

/// Formats an RGB color as uppercase `"#RRGGBB"` for display.
pub fn rgb_to_hex_upper(rgb: Rgb) -> String {
    Hex::from(rgb).to_upper()
}

/// Parses a hex color string into integer-valued RGB.
///
/// Returns `ColorError::InvalidHex` if the input is not six hex digits with
/// an optional leading `#`.
pub fn hex_to_rgb(s: &str) -> Result<Rgb, ColorError> {
    s.parse::<Hex>().map(Rgb::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white() {
        assert_eq!(rgb_to_hex(Rgb::BLACK), "#000000");
        assert_eq!(rgb_to_hex(Rgb::WHITE), "#ffffff");
    }

    #[test]
    fn channels_are_zero_padded() {
        assert_eq!(rgb_to_hex(Rgb::new(1.0, 10.0, 15.0)), "#010a0f");
    }

    #[test]
    fn rgb_to_hex_rounds_and_clamps() {
        assert_eq!(rgb_to_hex(Rgb::new(127.5, -4.0, 300.0)), "#8000ff");
        assert_eq!(rgb_to_hex(Rgb::new(0.49, 254.5, f64::NAN)), "#00ff00");
    }

    #[test]
    fn upper_display_variant() {
        assert_eq!(rgb_to_hex_upper(Rgb::new(51.0, 102.0, 204.0)), "#3366CC");
    }

    #[test]
    fn parse_extracts_channels_from_bits() {
        let rgb = hex_to_rgb("#3366cc").unwrap();
        assert_eq!(rgb, Rgb::new(51.0, 102.0, 204.0));
        assert_eq!("#3366cc".parse::<Hex>().unwrap().value(), 0x3366cc);
    }

    #[test]
    fn packed_value_matches_channels() {
        let hex = Hex::from(Rgb::new(0x12 as f64, 0x34 as f64, 0x56 as f64));
        assert_eq!(hex.value(), 0x123456);
        assert_eq!(Rgb::from(hex), Rgb::new(18.0, 52.0, 86.0));
        assert_eq!(hex.to_string(), "#123456");
        assert_eq!(hex.to_upper(), "#123456");
    }

    #[test]
    fn parse_accepts_missing_hash_and_uppercase() {
        assert_eq!(hex_to_rgb("C0FFEE").unwrap(), hex_to_rgb("#c0ffee").unwrap());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#fff").is_err());
        assert!(hex_to_rgb("#ff00ff00").is_err());
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("+fffff").is_err());
        assert!(hex_to_rgb("#ffé00").is_err());
    }

    #[test]
    fn parse_error_is_invalid_hex() {
        assert!(matches!(
            hex_to_rgb("#12345z"),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn display_round_trip() {
        let hex: Hex = "#804020".parse().unwrap();
        assert_eq!(hex.to_string(), "#804020");
    }

    #[test]
    fn hex_serializes_as_string() {
        let hex = Hex::from(Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#ff0000\"");
    }

    #[test]
    fn hex_deserializes_from_string() {
        let hex: Hex = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(Rgb::from(hex), Rgb::new(0.0, 255.0, 0.0));
    }

    #[test]
    fn hex_deserialize_rejects_invalid() {
        let result: Result<Hex, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip_is_exact(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let rgb = Rgb::from([r, g, b]);
                let hex = rgb_to_hex(rgb);
                prop_assert_eq!(hex.len(), 7);
                prop_assert_eq!(hex.clone(), hex.to_lowercase());
                prop_assert_eq!(hex_to_rgb(&hex).unwrap(), rgb);
            }

            #[test]
            fn fractional_rgb_round_trips_within_half(
                r in 0.0_f64..=255.0,
                g in 0.0_f64..=255.0,
                b in 0.0_f64..=255.0,
            ) {
                let back = hex_to_rgb(&rgb_to_hex(Rgb::new(r, g, b))).unwrap();
                prop_assert!((back.r - r).abs() <= 0.5);
                prop_assert!((back.g - g).abs() <= 0.5);
                prop_assert!((back.b - b).abs() <= 0.5);
            }
        }
    }
}

//! Color value types and the domain rules shared by every conversion.
//!
//! All channels are `f64`. Each type knows its own domain and can clamp
//! itself into it:
//!
//! | Type   | Channels          | Domain                         |
//! |--------|-------------------|--------------------------------|
//! | `Rgb`  | r, g, b           | [0, 255]                       |
//! | `Cmyk` | c, m, y, k        | [0, 100]                       |
//! | `Hsv`  | h / s, v          | [0, 360) / [0, 100]            |
//! | `Hls`  | h / l, s          | [0, 360) / [0, 100]            |
//! | `Xyz`  | x, y, z           | [0, ∞), scaled ×100            |
//!
//! NaN clamps to the lower bound of a channel; infinities clamp to the
//! nearest bound (a non-finite hue becomes 0).

use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// Upper bound of an RGB channel.
pub const RGB_MAX: f64 = 255.0;
/// Upper bound of a percentage channel (CMYK, saturation, value, lightness).
pub const PERCENT_MAX: f64 = 100.0;
/// Hue is an angle in degrees modulo this value.
pub const HUE_TURN: f64 = 360.0;

/// Clamps `v` into `[0, max]`, mapping NaN to 0.
pub(crate) fn clamp_channel(v: f64, max: f64) -> f64 {
    if v.is_nan() {
        log::trace!("clamping NaN channel to 0");
        return 0.0;
    }
    v.clamp(0.0, max)
}

/// Wraps a hue angle into `[0, 360)`.
pub(crate) fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        log::trace!("non-finite hue {h} wrapped to 0");
        return 0.0;
    }
    let wrapped = h.rem_euclid(HUE_TURN);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= HUE_TURN {
        0.0
    } else {
        wrapped
    }
}

/// RGB color, each channel in [0, 255]. The canonical pivot representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CMYK color, each channel a percentage in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// HSV color: hue in degrees, saturation and value as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// HLS color: hue in degrees, lightness and saturation as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

/// CIE XYZ tristimulus values (D50-adapted), scaled ×100.
///
/// Only used as a conversion pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns the color with every channel clamped to [0, 255].
    pub fn clamped(self) -> Self {
        Self {
            r: clamp_channel(self.r, RGB_MAX),
            g: clamp_channel(self.g, RGB_MAX),
            b: clamp_channel(self.b, RGB_MAX),
        }
    }

    /// Clamps and rounds each channel to the nearest integer value.
    pub fn rounded(self) -> Self {
        let c = self.clamped();
        Self {
            r: c.r.round(),
            g: c.g.round(),
            b: c.b.round(),
        }
    }

    /// Quantizes to 8-bit channels.
    pub fn to_u8(self) -> [u8; 3] {
        let c = self.rounded();
        [c.r as u8, c.g as u8, c.b as u8]
    }

    /// Returns `true` when all three channels are equal (a gray).
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r as f64, g as f64, b as f64)
    }
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Returns the color with every channel clamped to [0, 100].
    ///
    /// Every CMYK quadruple in range is a valid color.
    pub fn clamped(self) -> Self {
        Self {
            c: clamp_channel(self.c, PERCENT_MAX),
            m: clamp_channel(self.m, PERCENT_MAX),
            y: clamp_channel(self.y, PERCENT_MAX),
            k: clamp_channel(self.k, PERCENT_MAX),
        }
    }
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Wraps the hue into [0, 360) and clamps saturation and value.
    pub fn clamped(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: clamp_channel(self.s, PERCENT_MAX),
            v: clamp_channel(self.v, PERCENT_MAX),
        }
    }
}

impl Hls {
    pub const fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    /// Wraps the hue into [0, 360) and clamps lightness and saturation.
    pub fn clamped(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            l: clamp_channel(self.l, PERCENT_MAX),
            s: clamp_channel(self.s, PERCENT_MAX),
        }
    }
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Clamps each component to be non-negative. XYZ has no upper bound.
    pub fn clamped(self) -> Self {
        Self {
            x: clamp_channel(self.x, f64::INFINITY),
            y: clamp_channel(self.y, f64::INFINITY),
            z: clamp_channel(self.z, f64::INFINITY),
        }
    }
}

/// All user-facing model names, in display order.
const MODEL_NAMES: &[&str] = &["rgb", "cmyk", "hsv", "hls"];

/// A user-facing color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    Rgb,
    Cmyk,
    Hsv,
    Hls,
}

impl Model {
    /// Looks up a model by its lowercase name.
    ///
    /// Returns `ColorError::UnknownModel` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Model::Rgb),
            "cmyk" => Ok(Model::Cmyk),
            "hsv" => Ok(Model::Hsv),
            "hls" => Ok(Model::Hls),
            _ => Err(ColorError::UnknownModel(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Model::Rgb => "rgb",
            Model::Cmyk => "cmyk",
            Model::Hsv => "hsv",
            Model::Hls => "hls",
        }
    }

    /// Number of channels a color of this model carries.
    pub fn arity(self) -> usize {
        match self {
            Model::Cmyk => 4,
            Model::Rgb | Model::Hsv | Model::Hls => 3,
        }
    }

    /// Returns a slice of all recognized model names.
    pub fn list_names() -> &'static [&'static str] {
        MODEL_NAMES
    }
}

/// A color in any of the user-facing models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum Color {
    Rgb(Rgb),
    Cmyk(Cmyk),
    Hsv(Hsv),
    Hls(Hls),
}

impl Color {
    /// Builds a color of `model` from raw channel values in declaration order.
    ///
    /// Returns `ColorError::ArityMismatch` if `values` has the wrong length.
    /// Values are stored as given; clamping happens when the color is used.
    pub fn from_values(model: Model, values: &[f64]) -> Result<Self, ColorError> {
        if values.len() != model.arity() {
            return Err(ColorError::ArityMismatch {
                model: model.name().to_string(),
                expected: model.arity(),
                got: values.len(),
            });
        }
        let v = values;
        Ok(match model {
            Model::Rgb => Color::Rgb(Rgb::new(v[0], v[1], v[2])),
            Model::Cmyk => Color::Cmyk(Cmyk::new(v[0], v[1], v[2], v[3])),
            Model::Hsv => Color::Hsv(Hsv::new(v[0], v[1], v[2])),
            Model::Hls => Color::Hls(Hls::new(v[0], v[1], v[2])),
        })
    }

    pub fn model(&self) -> Model {
        match self {
            Color::Rgb(_) => Model::Rgb,
            Color::Cmyk(_) => Model::Cmyk,
            Color::Hsv(_) => Model::Hsv,
            Color::Hls(_) => Model::Hls,
        }
    }

    /// Returns the color with its channels clamped to the model's domain.
    pub fn clamped(self) -> Self {
        match self {
            Color::Rgb(c) => Color::Rgb(c.clamped()),
            Color::Cmyk(c) => Color::Cmyk(c.clamped()),
            Color::Hsv(c) => Color::Hsv(c.clamped()),
            Color::Hls(c) => Color::Hls(c.clamped()),
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c)
    }
}

impl From<Cmyk> for Color {
    fn from(c: Cmyk) -> Self {
        Color::Cmyk(c)
    }
}

impl From<Hsv> for Color {
    fn from(c: Hsv) -> Self {
        Color::Hsv(c)
    }
}

impl From<Hls> for Color {
    fn from(c: Hls) -> Self {
        Color::Hls(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Clamping --

    #[test]
    fn rgb_clamped_limits_each_channel() {
        let c = Rgb::new(-10.0, 300.0, 128.0).clamped();
        assert_eq!(c, Rgb::new(0.0, 255.0, 128.0));
    }

    #[test]
    fn rgb_clamped_maps_nan_to_zero_and_infinity_to_max() {
        let c = Rgb::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY).clamped();
        assert_eq!(c, Rgb::new(0.0, 255.0, 0.0));
    }

    #[test]
    fn rgb_rounded_rounds_half_away_from_zero() {
        let c = Rgb::new(0.5, 127.49, 254.6).rounded();
        assert_eq!(c, Rgb::new(1.0, 127.0, 255.0));
    }

    #[test]
    fn rgb_to_u8_quantizes_and_clamps() {
        assert_eq!(Rgb::new(-3.0, 12.4, 999.0).to_u8(), [0, 12, 255]);
    }

    #[test]
    fn cmyk_clamped_limits_to_percent() {
        let c = Cmyk::new(-1.0, 50.0, 150.0, f64::NAN).clamped();
        assert_eq!(c, Cmyk::new(0.0, 50.0, 100.0, 0.0));
    }

    #[test]
    fn hsv_clamped_wraps_hue() {
        let c = Hsv::new(370.0, 120.0, -5.0).clamped();
        assert!((c.h - 10.0).abs() < 1e-9);
        assert_eq!(c.s, 100.0);
        assert_eq!(c.v, 0.0);
    }

    #[test]
    fn negative_hue_wraps_forward() {
        assert!((normalize_hue(-30.0) - 330.0).abs() < 1e-9);
        assert_eq!(normalize_hue(-720.0), 0.0);
    }

    #[test]
    fn hue_of_exactly_360_wraps_to_zero() {
        assert_eq!(normalize_hue(360.0), 0.0);
    }

    #[test]
    fn tiny_negative_hue_stays_below_360() {
        let h = normalize_hue(-1e-20);
        assert!((0.0..360.0).contains(&h), "hue {h} out of range");
    }

    #[test]
    fn non_finite_hue_becomes_zero() {
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert_eq!(normalize_hue(f64::INFINITY), 0.0);
    }

    #[test]
    fn xyz_clamped_has_no_upper_bound() {
        let c = Xyz::new(-1.0, 250.0, f64::NAN).clamped();
        assert_eq!(c, Xyz::new(0.0, 250.0, 0.0));
    }

    #[test]
    fn achromatic_detection() {
        assert!(Rgb::new(7.0, 7.0, 7.0).is_achromatic());
        assert!(!Rgb::new(7.0, 7.0, 8.0).is_achromatic());
    }

    // -- Model / Color --

    #[test]
    fn model_from_name_is_case_insensitive() {
        assert_eq!(Model::from_name("CMYK").unwrap(), Model::Cmyk);
        assert_eq!(Model::from_name("hls").unwrap(), Model::Hls);
    }

    #[test]
    fn model_from_name_unknown_returns_error() {
        assert!(matches!(
            Model::from_name("lab"),
            Err(ColorError::UnknownModel(_))
        ));
    }

    #[test]
    fn model_names_round_trip() {
        for name in Model::list_names() {
            assert_eq!(Model::from_name(name).unwrap().name(), *name);
        }
    }

    #[test]
    fn color_from_values_checks_arity() {
        let err = Color::from_values(Model::Cmyk, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            ColorError::ArityMismatch {
                expected: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn color_from_values_builds_matching_variant() {
        let c = Color::from_values(Model::Hsv, &[120.0, 50.0, 25.0]).unwrap();
        assert_eq!(c, Color::Hsv(Hsv::new(120.0, 50.0, 25.0)));
        assert_eq!(c.model(), Model::Hsv);
    }

    #[test]
    fn color_clamped_delegates_to_variant() {
        let c = Color::Hls(Hls::new(-90.0, 150.0, 50.0)).clamped();
        assert_eq!(c, Color::Hls(Hls::new(270.0, 100.0, 50.0)));
    }

    // -- Serde --

    #[test]
    fn color_serializes_with_model_tag() {
        let c = Color::Rgb(Rgb::new(1.0, 2.0, 3.0));
        let v = serde_json::to_value(c).unwrap();
        assert_eq!(v["model"], "rgb");
        assert_eq!(v["g"], 2.0);
    }

    #[test]
    fn color_json_round_trip() {
        let c = Color::Cmyk(Cmyk::new(10.0, 20.0, 30.0, 40.0));
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn model_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Model::Hsv).unwrap(), "\"hsv\"");
    }
}

//! Conversion strategies: how a color travels between models.
//!
//! Two strategies exist and they are not numerically equivalent:
//!
//! - [`Direct`] uses the closed-form formulas in [`crate::direct`].
//! - [`ThroughXyz`] routes every non-RGB model through CIE XYZ
//!   ([`crate::xyz`]). For CMYK this is strictly lossier, since black is
//!   folded into RGB intensity on the way in.
//!
//! Both go through RGB as the canonical pivot. [`StrategyKind`] selects one
//! by name at runtime.

use crate::direct;
use crate::error::ColorError;
use crate::model::{Color, Model, Rgb};
use crate::xyz;

/// A way of converting colors between models.
///
/// This trait is **object-safe**: `Box<dyn Converter>` works for runtime
/// selection.
pub trait Converter {
    /// Short lowercase name of the strategy.
    fn name(&self) -> &'static str;

    /// Converts any color to integer-valued RGB.
    fn to_rgb(&self, color: Color) -> Rgb;

    /// Converts RGB to the requested model.
    fn from_rgb(&self, rgb: Rgb, target: Model) -> Color;

    /// Converts `source` to `target`, pivoting through RGB.
    ///
    /// Converting to the source's own model only clamps it.
    fn convert(&self, source: Color, target: Model) -> Color {
        if source.model() == target {
            return source.clamped();
        }
        self.from_rgb(self.to_rgb(source), target)
    }
}

/// Closed-form conversions, no colorimetric pivot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direct;

impl Converter for Direct {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn to_rgb(&self, color: Color) -> Rgb {
        match color {
            Color::Rgb(c) => c.rounded(),
            Color::Cmyk(c) => direct::cmyk_to_rgb(c),
            Color::Hsv(c) => direct::hsv_to_rgb(c),
            Color::Hls(c) => direct::hls_to_rgb(c),
        }
    }

    fn from_rgb(&self, rgb: Rgb, target: Model) -> Color {
        match target {
            Model::Rgb => Color::Rgb(rgb.clamped()),
            Model::Cmyk => Color::Cmyk(direct::rgb_to_cmyk(rgb)),
            Model::Hsv => Color::Hsv(direct::rgb_to_hsv(rgb)),
            Model::Hls => Color::Hls(direct::rgb_to_hls(rgb)),
        }
    }
}

/// Conversions routed through CIE XYZ with sRGB linearization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThroughXyz;

impl Converter for ThroughXyz {
    fn name(&self) -> &'static str {
        "xyz"
    }

    fn to_rgb(&self, color: Color) -> Rgb {
        let pivot = match color {
            Color::Rgb(c) => return c.rounded(),
            Color::Cmyk(c) => xyz::cmyk_to_xyz(c),
            Color::Hsv(c) => xyz::hsv_to_xyz(c),
            Color::Hls(c) => xyz::hls_to_xyz(c),
        };
        xyz::xyz_to_rgb(pivot)
    }

    fn from_rgb(&self, rgb: Rgb, target: Model) -> Color {
        let pivot = xyz::rgb_to_xyz(rgb);
        match target {
            Model::Rgb => Color::Rgb(xyz::xyz_to_rgb(pivot)),
            Model::Cmyk => Color::Cmyk(xyz::xyz_to_cmyk(pivot)),
            Model::Hsv => Color::Hsv(xyz::xyz_to_hsv(pivot)),
            Model::Hls => Color::Hls(xyz::xyz_to_hls(pivot)),
        }
    }
}

/// All available strategy names.
const STRATEGY_NAMES: &[&str] = &["direct", "xyz"];

/// Runtime-selectable conversion strategy.
///
/// Use [`StrategyKind::from_name`] for string-based construction (CLI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Closed-form formulas.
    #[default]
    Direct,
    /// Pivot through CIE XYZ.
    ThroughXyz,
}

impl StrategyKind {
    /// Looks up a strategy by name (`"direct"` or `"xyz"`).
    ///
    /// Returns `ColorError::UnknownStrategy` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "direct" => Ok(StrategyKind::Direct),
            "xyz" => Ok(StrategyKind::ThroughXyz),
            _ => Err(ColorError::UnknownStrategy(name.to_string())),
        }
    }

    /// Returns a slice of all recognized strategy names.
    pub fn list_strategies() -> &'static [&'static str] {
        STRATEGY_NAMES
    }
}

impl Converter for StrategyKind {
    fn name(&self) -> &'static str {
        match self {
            StrategyKind::Direct => Direct.name(),
            StrategyKind::ThroughXyz => ThroughXyz.name(),
        }
    }

    fn to_rgb(&self, color: Color) -> Rgb {
        match self {
            StrategyKind::Direct => Direct.to_rgb(color),
            StrategyKind::ThroughXyz => ThroughXyz.to_rgb(color),
        }
    }

    fn from_rgb(&self, rgb: Rgb, target: Model) -> Color {
        match self {
            StrategyKind::Direct => Direct.from_rgb(rgb, target),
            StrategyKind::ThroughXyz => ThroughXyz.from_rgb(rgb, target),
        }
    }
}

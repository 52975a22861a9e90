//! A synchronized color: one value seen through every model at once.
//!
//! RGB is the source of truth. An edit in any model is converted to RGB
//! through the active strategy and every *other* model is recomputed from
//! that RGB. The edited model keeps the value it was given (after clamping),
//! so an interactive slider does not jump because of its own round trip.
//!
//! The state is an ordinary owned value; whoever hosts the UI owns it and
//! passes edits in.

use crate::error::ColorError;
use crate::hex::Hex;
use crate::model::{Cmyk, Color, Hls, Hsv, Model, Rgb, Xyz};
use crate::strategy::{Converter, StrategyKind};
use crate::xyz::rgb_to_xyz;
use serde::{Deserialize, Serialize};

/// Initial color of a fresh [`ColorState`].
pub const DEFAULT_RGB: Rgb = Rgb::new(51.0, 102.0, 204.0);

/// Models derived from RGB on every edit.
const DERIVED: [Model; 3] = [Model::Cmyk, Model::Hsv, Model::Hls];

/// Every representation of the current color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorState {
    strategy: StrategyKind,
    rgb: Rgb,
    cmyk: Cmyk,
    hsv: Hsv,
    hls: Hls,
}

/// Serializable view of a [`ColorState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub strategy: String,
    pub hex: Hex,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    pub hsv: Hsv,
    pub hls: Hls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xyz: Option<Xyz>,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(DEFAULT_RGB, StrategyKind::default())
    }
}

impl ColorState {
    /// Creates a state holding `rgb` (clamped), with every other model
    /// derived through `strategy`.
    pub fn new(rgb: Rgb, strategy: StrategyKind) -> Self {
        let mut state = Self {
            strategy,
            rgb: rgb.clamped(),
            cmyk: Cmyk::new(0.0, 0.0, 0.0, 0.0),
            hsv: Hsv::new(0.0, 0.0, 0.0),
            hls: Hls::new(0.0, 0.0, 0.0),
        };
        state.refresh(Model::Rgb);
        state
    }

    /// Applies an edit in any model.
    pub fn apply(&mut self, color: Color) {
        let color = color.clamped();
        let edited = color.model();
        self.rgb = self.strategy.to_rgb(color);
        self.store(color);
        self.refresh(edited);
        log::debug!(
            "{} edit via {} -> rgb({}, {}, {})",
            edited.name(),
            self.strategy.name(),
            self.rgb.r,
            self.rgb.g,
            self.rgb.b
        );
    }

    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.apply(Color::Rgb(rgb));
    }

    pub fn set_cmyk(&mut self, cmyk: Cmyk) {
        self.apply(Color::Cmyk(cmyk));
    }

    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.apply(Color::Hsv(hsv));
    }

    pub fn set_hls(&mut self, hls: Hls) {
        self.apply(Color::Hls(hls));
    }

    /// Parses a hex string and applies it as an RGB edit.
    ///
    /// On error the state is left unchanged.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let hex: Hex = hex.parse()?;
        self.set_rgb(hex.into());
        Ok(())
    }

    /// Switches strategy and re-derives every model from the current RGB.
    pub fn set_strategy(&mut self, strategy: StrategyKind) {
        self.strategy = strategy;
        self.refresh(Model::Rgb);
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn hls(&self) -> Hls {
        self.hls
    }

    pub fn hex(&self) -> Hex {
        Hex::from(self.rgb)
    }

    /// XYZ of the current color, computed on demand.
    pub fn xyz(&self) -> Xyz {
        rgb_to_xyz(self.rgb)
    }

    /// Returns the current color in `model`.
    pub fn get(&self, model: Model) -> Color {
        match model {
            Model::Rgb => Color::Rgb(self.rgb),
            Model::Cmyk => Color::Cmyk(self.cmyk),
            Model::Hsv => Color::Hsv(self.hsv),
            Model::Hls => Color::Hls(self.hls),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            strategy: self.strategy.name().to_string(),
            hex: self.hex(),
            rgb: self.rgb,
            cmyk: self.cmyk,
            hsv: self.hsv,
            hls: self.hls,
            xyz: None,
        }
    }

    /// Like [`ColorState::snapshot`], with the XYZ pivot included.
    pub fn snapshot_with_xyz(&self) -> Snapshot {
        Snapshot {
            xyz: Some(self.xyz()),
            ..self.snapshot()
        }
    }

    fn store(&mut self, color: Color) {
        match color {
            Color::Rgb(c) => self.rgb = c,
            Color::Cmyk(c) => self.cmyk = c,
            Color::Hsv(c) => self.hsv = c,
            Color::Hls(c) => self.hls = c,
        }
    }

    /// Re-derives every model except `edited` from RGB.
    fn refresh(&mut self, edited: Model) {
        for model in DERIVED.into_iter().filter(|m| *m != edited) {
            let derived = self.strategy.from_rgb(self.rgb, model);
            self.store(derived);
        }
    }
}

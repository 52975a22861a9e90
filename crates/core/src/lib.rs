#![deny(unsafe_code)]
//! Color model conversions for colorsync.
//!
//! Converts among RGB, CMYK, HSV, HLS and `#rrggbb` hex, either with
//! closed-form formulas ([`direct`]) or through CIE XYZ with sRGB
//! linearization ([`xyz`]). [`Converter`] abstracts over the two strategies,
//! and [`ColorState`] keeps every representation of one color in sync.
//!
//! All conversions are pure and total: out-of-domain input is clamped, never
//! rejected.

pub mod direct;
pub mod error;
pub mod hex;
pub mod linear;
pub mod model;
pub mod state;
pub mod strategy;
pub mod xyz;

pub use direct::{cmyk_to_rgb, hls_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hls, rgb_to_hsv};
pub use error::ColorError;
pub use hex::{hex_to_rgb, rgb_to_hex, rgb_to_hex_upper, Hex};
pub use linear::{decode, encode};
pub use model::{Cmyk, Color, Hls, Hsv, Model, Rgb, Xyz};
pub use state::{ColorState, Snapshot};
pub use strategy::{Converter, Direct, StrategyKind, ThroughXyz};
pub use xyz::{
    cmyk_to_xyz, hls_to_xyz, hsv_to_xyz, rgb_to_xyz, xyz_to_cmyk, xyz_to_hls, xyz_to_hsv,
    xyz_to_rgb,
};

//! Closed-form conversions between RGB and CMYK, HSV, HLS.
//!
//! These operate directly on channel triples without any colorimetric
//! pivot. Every function clamps its input to the model's domain first and
//! returns values inside the target domain. Functions producing RGB round
//! each channel to the nearest integer.

use crate::model::{Cmyk, Hls, Hsv, Rgb, HUE_TURN, PERCENT_MAX, RGB_MAX};

/// Max, min and hue shared by the HSV and HLS forward conversions.
struct Chroma {
    max: f64,
    min: f64,
    delta: f64,
    /// Hue as a fraction of a full turn, in [0, 1].
    hue: f64,
}

fn chroma(rgb: Rgb) -> Chroma {
    let rgb = rgb.clamped();
    let (r, g, b) = (rgb.r / RGB_MAX, rgb.g / RGB_MAX, rgb.b / RGB_MAX);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if rgb.is_achromatic() {
        0.0
    } else if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    Chroma {
        max,
        min,
        delta,
        hue,
    }
}

/// Scales unit channels to [0, 255] and rounds.
fn rgb_from_unit(r: f64, g: f64, b: f64) -> Rgb {
    Rgb::new(r * RGB_MAX, g * RGB_MAX, b * RGB_MAX).rounded()
}

/// Converts RGB to CMYK using the minimum-channel black rule.
///
/// Pure black yields `k = 100` with `c = m = y = 0`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let rgb = rgb.clamped();
    let c = 1.0 - rgb.r / RGB_MAX;
    let m = 1.0 - rgb.g / RGB_MAX;
    let y = 1.0 - rgb.b / RGB_MAX;
    let k = c.min(m).min(y);

    let (c, m, y) = if k < 1.0 {
        ((c - k) / (1.0 - k), (m - k) / (1.0 - k), (y - k) / (1.0 - k))
    } else {
        (0.0, 0.0, 0.0)
    };

    Cmyk::new(c * PERCENT_MAX, m * PERCENT_MAX, y * PERCENT_MAX, k * PERCENT_MAX).clamped()
}

/// Converts CMYK to RGB by multiplying out the ink coverage.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let Cmyk { c, m, y, k } = cmyk.clamped();
    let white = 1.0 - k / PERCENT_MAX;
    rgb_from_unit(
        (1.0 - c / PERCENT_MAX) * white,
        (1.0 - m / PERCENT_MAX) * white,
        (1.0 - y / PERCENT_MAX) * white,
    )
}

/// Converts RGB to HSV. Achromatic colors get hue 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Chroma {
        max, delta, hue, ..
    } = chroma(rgb);
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv::new(hue * HUE_TURN, s * PERCENT_MAX, max * PERCENT_MAX).clamped()
}

/// Converts HSV to RGB using the six-sector reconstruction.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv.clamped();
    let (h, s, v) = (h / HUE_TURN, s / PERCENT_MAX, v / PERCENT_MAX);

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    rgb_from_unit(r, g, b)
}

/// Converts RGB to HLS. Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hls(rgb: Rgb) -> Hls {
    let Chroma {
        max,
        min,
        delta,
        hue,
    } = chroma(rgb);
    let l = (max + min) / 2.0;
    // The denominator only reaches zero at l = 0 or l = 1, where delta is zero.
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hls::new(hue * HUE_TURN, l * PERCENT_MAX, s * PERCENT_MAX).clamped()
}

/// Converts HLS to RGB via chroma and hue sextant.
pub fn hls_to_rgb(hls: Hls) -> Rgb {
    let Hls { h, l, s } = hls.clamped();
    let (h, l, s) = (h / HUE_TURN, l / PERCENT_MAX, s / PERCENT_MAX);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    rgb_from_unit(r + m, g + m, b + m)
}

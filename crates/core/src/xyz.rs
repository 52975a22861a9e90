//! CIE XYZ as a device-independent pivot.
//!
//! RGB enters XYZ through sRGB linearization and a fixed sRGB → XYZ matrix
//! (Bradford-adapted to D50); XYZ leaves through the inverse matrix and sRGB
//! gamma encoding. CMYK, HSV and HLS reach XYZ by composition.
//!
//! XYZ values are scaled ×100, so the D50 white point is roughly
//! (96.42, 100.0, 82.51).

use crate::direct::{hls_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hls, rgb_to_hsv};
use crate::linear::{decode, decode_unit, encode};
use crate::model::{Cmyk, Hls, Hsv, Rgb, Xyz, PERCENT_MAX};

/// Linear sRGB → XYZ (D50).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4360747, 0.3850649, 0.1430804],
    [0.2225045, 0.7168786, 0.0606169],
    [0.0139322, 0.0971045, 0.7141733],
];

/// XYZ (D50) → linear sRGB.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.1338561, -1.6168667, -0.4906146],
    [-0.9787684, 1.9161415, 0.0334540],
    [0.0719453, -0.2289914, 1.4052427],
];

const XYZ_SCALE: f64 = 100.0;

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

fn linear_to_xyz(linear: [f64; 3]) -> Xyz {
    let [x, y, z] = mul(&RGB_TO_XYZ, linear);
    Xyz::new(x * XYZ_SCALE, y * XYZ_SCALE, z * XYZ_SCALE)
}

/// Converts RGB to XYZ: linearize each channel, then apply the forward matrix.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let rgb = rgb.clamped();
    linear_to_xyz([decode(rgb.r), decode(rgb.g), decode(rgb.b)])
}

/// Converts XYZ to RGB: apply the inverse matrix, gamma-encode, round.
///
/// Out-of-gamut XYZ produces linear values outside [0, 1]; those are
/// clamped to [0, 255] without error.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let xyz = xyz.clamped();
    let [r, g, b] = mul(
        &XYZ_TO_RGB,
        [xyz.x / XYZ_SCALE, xyz.y / XYZ_SCALE, xyz.z / XYZ_SCALE],
    );
    Rgb::new(encode(r), encode(g), encode(b)).rounded()
}

/// Converts CMYK to XYZ by blending black into each ink, inverting to
/// normalized RGB and linearizing.
///
/// Four ink channels collapse onto three tristimulus values, so distinct
/// CMYK quadruples can share one XYZ.
pub fn cmyk_to_xyz(cmyk: Cmyk) -> Xyz {
    let Cmyk { c, m, y, k } = cmyk.clamped();
    let k = k / PERCENT_MAX;
    let to_linear = |ink: f64| {
        let effective = (ink / PERCENT_MAX) * (1.0 - k) + k;
        decode_unit(1.0 - effective)
    };
    linear_to_xyz([to_linear(c), to_linear(m), to_linear(y)])
}

/// Converts XYZ to CMYK through RGB and the minimum-channel black rule.
pub fn xyz_to_cmyk(xyz: Xyz) -> Cmyk {
    rgb_to_cmyk(xyz_to_rgb(xyz))
}

pub fn hsv_to_xyz(hsv: Hsv) -> Xyz {
    rgb_to_xyz(hsv_to_rgb(hsv))
}

pub fn xyz_to_hsv(xyz: Xyz) -> Hsv {
    rgb_to_hsv(xyz_to_rgb(xyz))
}

pub fn hls_to_xyz(hls: Hls) -> Xyz {
    rgb_to_xyz(hls_to_rgb(hls))
}

pub fn xyz_to_hls(xyz: Xyz) -> Hls {
    rgb_to_hls(xyz_to_rgb(xyz))
}

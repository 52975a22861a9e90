//! sRGB transfer functions: gamma-encoded channel values to linear light and back.
//!
//! The piecewise curve uses the standard sRGB constants. Both directions must
//! use exactly these thresholds for RGB → XYZ → RGB to round-trip.

use crate::model::{clamp_channel, RGB_MAX};

/// Encoded values at or below this use the linear segment when decoding.
const DECODE_THRESHOLD: f64 = 0.04045;
/// Linear values at or below this use the linear segment when encoding.
const ENCODE_THRESHOLD: f64 = 0.0031308;
const LINEAR_SLOPE: f64 = 12.92;
const GAMMA: f64 = 2.4;
const OFFSET: f64 = 0.055;

/// Applies inverse sRGB gamma to a single encoded component in [0, 1].
pub fn decode_unit(v: f64) -> f64 {
    if v <= DECODE_THRESHOLD {
        v / LINEAR_SLOPE
    } else {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    }
}

/// Applies sRGB gamma to a single linear component, producing a value in [0, 1]
/// for in-gamut input.
pub fn encode_unit(linear: f64) -> f64 {
    if linear <= ENCODE_THRESHOLD {
        linear * LINEAR_SLOPE
    } else {
        (1.0 + OFFSET) * linear.powf(1.0 / GAMMA) - OFFSET
    }
}

/// Decodes an sRGB channel in [0, 255] to linear light in [0, 1].
///
/// The channel is clamped to [0, 255] first.
pub fn decode(channel: f64) -> f64 {
    decode_unit(clamp_channel(channel, RGB_MAX) / RGB_MAX)
}

/// Encodes linear light to an sRGB channel, clamped to [0, 255].
///
/// Out-of-gamut linear values (negative or above 1) clamp silently.
/// The result is not rounded.
pub fn encode(linear: f64) -> f64 {
    clamp_channel(encode_unit(linear) * RGB_MAX, RGB_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn decode_black_is_zero_and_white_is_one() {
        assert!(approx_eq(decode(0.0), 0.0));
        assert!(approx_eq(decode(255.0), 1.0));
    }

    #[test]
    fn decode_boundary_uses_linear_segment() {
        // 0.04045 sits on the linear side of the curve.
        assert!(approx_eq(decode_unit(0.04045), 0.04045 / 12.92));

        let expected = ((0.04046 + 0.055) / 1.055_f64).powf(2.4);
        assert!(approx_eq(decode_unit(0.04046), expected));
    }

    #[test]
    fn encode_boundary_uses_linear_segment() {
        assert!(approx_eq(encode_unit(0.0031308), 0.0031308 * 12.92));

        let expected = 1.055 * 0.0031309_f64.powf(1.0 / 2.4) - 0.055;
        assert!(approx_eq(encode_unit(0.0031309), expected));
    }

    #[test]
    fn mid_gray_decodes_to_about_a_fifth() {
        // sRGB 128 is roughly 21.6% linear light.
        let lin = decode(128.0);
        assert!((lin - 0.2158605).abs() < 1e-6, "got {lin}");
    }

    #[test]
    fn decode_clamps_out_of_range_channels() {
        assert!(approx_eq(decode(-20.0), 0.0));
        assert!(approx_eq(decode(400.0), 1.0));
        assert!(approx_eq(decode(f64::NAN), 0.0));
    }

    #[test]
    fn encode_clamps_out_of_gamut() {
        assert_eq!(encode(-0.25), 0.0);
        assert_eq!(encode(1.5), 255.0);
    }

    #[test]
    fn encode_white_is_255() {
        assert!(approx_eq(encode(1.0), 255.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decode_encode_round_trip(channel in 0.0_f64..=255.0) {
                let back = encode(decode(channel));
                prop_assert!(
                    (back - channel).abs() < 1e-9,
                    "{} vs {}", back, channel
                );
            }

            #[test]
            fn decode_is_monotonic(a in 0.0_f64..=255.0, b in 0.0_f64..=255.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(decode(lo) <= decode(hi));
            }

            #[test]
            fn encode_always_in_channel_range(linear in -2.0_f64..=2.0) {
                let c = encode(linear);
                prop_assert!((0.0..=255.0).contains(&c), "{} out of range", c);
            }
        }
    }
}

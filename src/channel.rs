//! Conversion between fractional intensities and 8-bit channel values.

/// Maps a fractional intensity (nominally in `0.0..=1.0`) to a channel value in `0..=255`.
///
/// The intensity is scaled by `255` and truncated toward zero (not rounded),
/// then saturated to the channel range.
/// Non-finite input never faults: `NaN` maps to `0`,
/// positive infinity to `255`, and negative infinity to `0`.
///
/// # Examples
/// ```
/// # use gamutshift::channel::to_channel;
/// assert_eq!(to_channel(0.2), 51);
/// assert_eq!(to_channel(-0.1), 0);
/// assert_eq!(to_channel(2.5), 255);
/// assert_eq!(to_channel(f64::NAN), 0);
/// ```
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_channel(n: f64) -> u8 {
    // float to int casts saturate, and NaN casts to 0
    let value = (255.0 * n) as i32;
    value.clamp(0, u8::MAX.into()) as u8
}

/// Maps a channel value to its fractional intensity in `0.0..=1.0`.
#[must_use]
#[inline]
pub fn to_unit(value: u8) -> f64 {
    f64::from(value) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_and_saturates() {
        assert_eq!(to_channel(-0.1), 0);
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(0.2), 51);
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(2.5), 255);
    }

    #[test]
    fn truncates_toward_zero() {
        // 0.999 * 255 = 254.745
        assert_eq!(to_channel(0.999), 254);
        // 0.5 * 255 = 127.5
        assert_eq!(to_channel(0.5), 127);
    }

    #[test]
    fn non_finite_input() {
        assert_eq!(to_channel(f64::NAN), 0);
        assert_eq!(to_channel(f64::INFINITY), 255);
        assert_eq!(to_channel(f64::NEG_INFINITY), 0);
        assert_eq!(to_channel(f64::MAX), 255);
        assert_eq!(to_channel(f64::MIN), 0);
    }

    #[test]
    fn unit_round_trip() {
        for value in 0..=u8::MAX {
            // (v / 255) * 255 may land just below v, so allow truncation by one
            let back = to_channel(to_unit(value));
            assert!(back == value || back + 1 == value);
        }
        assert_eq!(to_channel(to_unit(0)), 0);
        assert_eq!(to_channel(to_unit(255)), 255);
    }
}

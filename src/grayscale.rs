//! Luminance based grayscale conversion.
//!
//! The luminance of a pixel is `0.3 R + 0.59 G + 0.11 B`, truncated to an integer.
//! These weights are not the Rec. 709 ones (`0.2126`, `0.7152`, `0.0722`),
//! and they are kept as is so that the output stays bit-compatible with existing images.

use crate::{Pixel, PixelTransform};

/// The weight of the red channel.
pub const RED_WEIGHT: f64 = 0.3;

/// The weight of the green channel.
pub const GREEN_WEIGHT: f64 = 0.59;

/// The weight of the blue channel.
pub const BLUE_WEIGHT: f64 = 0.11;

/// Returns the truncated luminance of the given pixel.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn luminance(pixel: Pixel) -> u8 {
    let luma = RED_WEIGHT * f64::from(pixel.red)
        + GREEN_WEIGHT * f64::from(pixel.green)
        + BLUE_WEIGHT * f64::from(pixel.blue);

    // the weights sum to 1, so luma is in 0.0..=255.0
    luma as u8
}

/// Converts a pixel to gray, setting all three color channels to its [`luminance`].
///
/// Alpha is left unchanged.
///
/// Applying this function to an already gray pixel may lower its value by one,
/// since the weighted sum of a gray value can land just below that value.
#[must_use]
#[inline]
pub fn to_gray(pixel: Pixel) -> Pixel {
    let gray = luminance(pixel);
    Pixel::new(gray, gray, gray, pixel.alpha)
}

/// The [`PixelTransform`] performing [`to_gray`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grayscale;

impl PixelTransform for Grayscale {
    #[inline]
    fn transform(&self, pixel: Pixel) -> Pixel {
        to_gray(pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn assert_gray(pixel: Pixel, value: u8) {
        assert_eq!(to_gray(pixel), Pixel::new(value, value, value, pixel.alpha));
    }

    #[test]
    fn white_and_black() {
        assert_gray(WHITE, 255);
        assert_gray(BLACK, 0);
    }

    #[test]
    fn primaries() {
        // floor(0.3 * 255)
        assert_gray(RED, 76);
        // floor(0.59 * 128)
        assert_gray(GREEN, 75);
        // floor(0.11 * 255)
        assert_gray(BLUE, 28);
    }

    #[test]
    fn alpha_is_kept() {
        let pixel = Pixel::new(255, 0, 0, 17);
        assert_eq!(to_gray(pixel), Pixel::new(76, 76, 76, 17));
    }

    #[test]
    fn idempotent_on_reference_colors() {
        for pixel in [WHITE, BLACK, RED, GREEN, BLUE] {
            let once = to_gray(pixel);
            assert_eq!(to_gray(once), once);
        }
    }

    #[test]
    fn idempotent_within_one() {
        for pixel in test_pixels(4096) {
            let once = to_gray(pixel);
            let twice = to_gray(once);
            assert_eq!(twice.alpha, once.alpha);
            assert!(once.red.abs_diff(twice.red) <= 1);
        }
    }

    #[test]
    fn gray_drift() {
        // 0.3 * 78 + 0.59 * 78 + 0.11 * 78 is slightly below 78
        assert_gray(BROWN, 78);
        assert_gray(Pixel::new(78, 78, 78, 255), 77);
    }
}

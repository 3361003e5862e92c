//! Conversion from gamma encoded RGB pixels to the CIE XYZ color space.
//!
//! Input pixels are decoded with a pure power law of `2.2`
//! (not the piecewise sRGB curve) and then mapped to XYZ relative to D50
//! using a Bradford adapted matrix. XYZ values are not clamped;
//! saturated colors are only brought back into range when encoding to RGB again
//! (see [`ColorSpace::from_xyz`](crate::ColorSpace::from_xyz)).

use crate::{channel::to_unit, Pixel, Xyz};

/// A row-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3(pub [[f64; 3]; 3]);

impl Matrix3 {
    /// Multiplies this matrix with the column vector `v`.
    #[must_use]
    #[inline]
    pub fn mul_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let [r0, r1, r2] = &self.0;
        [
            v[0] * r0[0] + v[1] * r0[1] + v[2] * r0[2],
            v[0] * r1[0] + v[1] * r1[1] + v[2] * r1[2],
            v[0] * r2[0] + v[1] * r2[1] + v[2] * r2[2],
        ]
    }
}

/// The gamma used to decode input pixels.
pub const DECODING_GAMMA: f64 = 2.2;

/// The Bradford adapted linear RGB to XYZ (D50) matrix.
#[rustfmt::skip]
pub const RGB_TO_XYZ: Matrix3 = Matrix3([
    [0.4360747, 0.3850649, 0.1430804],
    [0.2225045, 0.7168786, 0.0606169],
    [0.0139322, 0.0971045, 0.7141733],
]);

/// Decodes the color channels of a pixel to linear intensities.
#[must_use]
#[inline]
pub fn to_linear(pixel: Pixel) -> [f64; 3] {
    [pixel.red, pixel.green, pixel.blue].map(|c| to_unit(c).powf(DECODING_GAMMA))
}

/// Converts a pixel to the CIE XYZ color space. Alpha is ignored.
#[must_use]
#[inline]
pub fn to_xyz(pixel: Pixel) -> Xyz {
    let [x, y, z] = RGB_TO_XYZ.mul_vector(to_linear(pixel));
    Xyz::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn assert_xyz_eq(actual: Xyz, expected: [f64; 3]) {
        let actual = [actual.x, actual.y, actual.z];
        for (a, e) in actual.into_iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{a} != {e}");
        }
    }

    #[test]
    fn black_is_origin() {
        assert_xyz_eq(to_xyz(BLACK), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn white_is_d50() {
        assert_xyz_eq(to_xyz(WHITE), [0.96422, 1.0, 0.82521]);
    }

    #[test]
    fn gray_is_scaled_white() {
        let linear = to_unit(128).powf(DECODING_GAMMA);
        assert_xyz_eq(
            to_xyz(Pixel::new(128, 128, 128, 255)),
            [0.96422 * linear, linear, 0.82521 * linear],
        );
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(to_xyz(Pixel::new(10, 20, 30, 0)), to_xyz(Pixel::new(10, 20, 30, 255)));
    }

    #[test]
    fn xyz_is_non_negative() {
        for pixel in test_pixels(1024) {
            let xyz = to_xyz(pixel);
            assert!(xyz.x >= 0.0 && xyz.y >= 0.0 && xyz.z >= 0.0);
            assert!(xyz.y <= 1.0 + 1e-9);
        }
    }
}

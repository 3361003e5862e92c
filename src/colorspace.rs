use crate::{
    channel::to_channel,
    xyz::{to_xyz, Matrix3},
    InvalidArgument, Pixel, PixelTransform, Xyz,
};
use std::{fmt::Display, str::FromStr};

/// The transfer data of an RGB color space relative to the D50 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbProfile {
    /// The Bradford adapted XYZ (D50) to linear RGB matrix.
    pub xyz_to_rgb: Matrix3,
    /// The gamma exponent, applied as `linear.powf(1.0 / gamma)` when encoding.
    pub gamma: f64,
}

/// Adobe RGB (1998).
#[rustfmt::skip]
const ADOBE_RGB: RgbProfile = RgbProfile {
    xyz_to_rgb: Matrix3([
        [ 1.9624274, -0.6105343, -0.3413404],
        [-0.9787684,  1.9161415,  0.0334540],
        [ 0.0286869, -0.1406752,  1.3487655],
    ]),
    gamma: 2.2,
};

/// Apple RGB.
#[rustfmt::skip]
const APPLE_RGB: RgbProfile = RgbProfile {
    xyz_to_rgb: Matrix3([
        [ 2.8510695, -1.3605261, -0.4708281],
        [-1.0927680,  2.0348871,  0.0227598],
        [ 0.1027403, -0.2964984,  1.4510659],
    ]),
    gamma: 1.8,
};

/// Wide Gamut RGB.
#[rustfmt::skip]
const WIDE_GAMUT: RgbProfile = RgbProfile {
    xyz_to_rgb: Matrix3([
        [ 1.4628067, -0.1840623, -0.2743606],
        [-0.5217933,  1.4472381,  0.0677227],
        [ 0.0349342, -0.0968930,  1.2884099],
    ]),
    gamma: 1.2,
};

/// The set of supported target RGB color spaces.
///
/// Pixels are converted by decoding them to CIE XYZ (see the [`xyz`](crate::xyz) module)
/// and then encoding the XYZ color with the target space's matrix and gamma.
///
/// # Examples
/// ```
/// # use gamutshift::{ColorSpace, Pixel};
/// let space: ColorSpace = "apple-rgb".parse().unwrap();
/// assert_eq!(space, ColorSpace::AppleRgb);
/// assert_eq!(space.convert(Pixel::new(0, 0, 0, 128)), Pixel::new(0, 0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Adobe RGB (1998) with a gamma of `2.2`.
    AdobeRgb,
    /// Apple RGB with a gamma of `1.8`.
    AppleRgb,
    /// Wide Gamut RGB with a gamma of `1.2`.
    WideGamut,
}

impl ColorSpace {
    /// All supported color spaces.
    pub const ALL: [Self; 3] = [Self::AdobeRgb, Self::AppleRgb, Self::WideGamut];

    /// Returns the matrix and gamma for this color space.
    #[must_use]
    pub const fn profile(self) -> &'static RgbProfile {
        match self {
            ColorSpace::AdobeRgb => &ADOBE_RGB,
            ColorSpace::AppleRgb => &APPLE_RGB,
            ColorSpace::WideGamut => &WIDE_GAMUT,
        }
    }

    /// The XYZ (D50) to linear RGB matrix of this color space.
    #[must_use]
    pub const fn xyz_to_rgb_matrix(self) -> Matrix3 {
        self.profile().xyz_to_rgb
    }

    /// The gamma exponent of this color space.
    #[must_use]
    pub const fn gamma(self) -> f64 {
        self.profile().gamma
    }

    /// Encodes an XYZ color as a pixel in this color space.
    ///
    /// Each channel is gamma encoded and then mapped with
    /// [`to_channel`](crate::channel::to_channel), so out of gamut colors saturate
    /// and negative intensities (which encode to `NaN`) become `0`.
    /// The returned pixel is always fully opaque.
    #[must_use]
    #[inline]
    pub fn from_xyz(self, xyz: Xyz) -> Pixel {
        let RgbProfile { xyz_to_rgb, gamma } = self.profile();
        let [r, g, b] = xyz_to_rgb
            .mul_vector([xyz.x, xyz.y, xyz.z])
            .map(|c| to_channel(c.powf(1.0 / gamma)));

        Pixel::new(r, g, b, u8::MAX)
    }

    /// Converts a pixel to this color space through CIE XYZ.
    ///
    /// The alpha of the input pixel is dropped, and the result is always fully opaque.
    #[must_use]
    #[inline]
    pub fn convert(self, pixel: Pixel) -> Pixel {
        self.from_xyz(to_xyz(pixel))
    }

    /// The canonical name of this color space, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorSpace::AdobeRgb => "adobe-rgb",
            ColorSpace::AppleRgb => "apple-rgb",
            ColorSpace::WideGamut => "wide-gamut",
        }
    }
}

impl PixelTransform for ColorSpace {
    #[inline]
    fn transform(&self, pixel: Pixel) -> Pixel {
        self.convert(pixel)
    }
}

impl Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adobe-rgb" | "adobergb" | "adobe" => Ok(ColorSpace::AdobeRgb),
            "apple-rgb" | "applergb" | "apple" => Ok(ColorSpace::AppleRgb),
            "wide-gamut" | "widegamut" | "wide" => Ok(ColorSpace::WideGamut),
            _ => Err(InvalidArgument::UnknownColorSpace(s.to_owned())),
        }
    }
}

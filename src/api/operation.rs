use crate::{
    grayscale, map::map_pixels, ColorReducer, ColorSpace, Pixel, PixelBuffer, PixelTransform,
};
#[cfg(feature = "threads")]
use crate::map::map_pixels_par;
use std::fmt::Display;

/// The set of supported buffer operations.
///
/// See the descriptions on each enum variant for more information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Luminance based grayscale conversion.
    ///
    /// See the [`grayscale`](crate::grayscale) module for more details.
    #[default]
    Grayscale,
    /// Conversion to another RGB color space through CIE XYZ.
    ///
    /// The output is always fully opaque.
    ConvertColorSpace(ColorSpace),
    /// Uniform color reduction.
    ///
    /// See the [`reduce`](crate::reduce) module for more details.
    ReduceColors(ColorReducer),
}

impl Operation {
    /// Applies this operation to each pixel of `buffer`.
    #[must_use]
    pub fn apply(&self, buffer: &PixelBuffer) -> PixelBuffer {
        map_pixels(buffer, self)
    }

    /// Applies this operation to each pixel of `buffer` in parallel.
    #[cfg(feature = "threads")]
    #[must_use]
    pub fn apply_par(&self, buffer: &PixelBuffer) -> PixelBuffer {
        map_pixels_par(buffer, self)
    }
}

impl PixelTransform for Operation {
    #[inline]
    fn transform(&self, pixel: Pixel) -> Pixel {
        match self {
            Operation::Grayscale => grayscale::to_gray(pixel),
            Operation::ConvertColorSpace(space) => space.convert(pixel),
            Operation::ReduceColors(reducer) => reducer.reduce(pixel),
        }
    }
}

impl From<ColorSpace> for Operation {
    fn from(space: ColorSpace) -> Self {
        Self::ConvertColorSpace(space)
    }
}

impl From<ColorReducer> for Operation {
    fn from(reducer: ColorReducer) -> Self {
        Self::ReduceColors(reducer)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Grayscale => f.write_str("grayscale"),
            Operation::ConvertColorSpace(space) => write!(f, "convert to {space}"),
            Operation::ReduceColors(ColorReducer { red, green, blue }) => write!(
                f,
                "reduce to {}x{}x{} levels",
                red.levels(),
                green.levels(),
                blue.levels()
            ),
        }
    }
}

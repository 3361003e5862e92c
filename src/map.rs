//! Buffer level operations that apply a [`PixelTransform`] to every pixel.
//!
//! Each output buffer has the same dimensions as its input buffer,
//! and the input is never modified. With the `threads` feature enabled,
//! every function has a `_par` twin that splits the pixels across the current
//! [`rayon`] thread pool. Both produce identical output.

use crate::{
    grayscale::Grayscale, ColorReducer, ColorSpace, InvalidArgument, Pixel, PixelBuffer,
    PixelTransform,
};
#[cfg(feature = "threads")]
use rayon::prelude::*;

/// Applies `transform` to each pixel of a slice.
pub(crate) fn map_slice(pixels: &[Pixel], transform: &impl PixelTransform) -> Vec<Pixel> {
    pixels.iter().map(|&p| transform.transform(p)).collect()
}

/// Applies `transform` to each pixel of a slice in parallel.
#[cfg(feature = "threads")]
pub(crate) fn map_slice_par(pixels: &[Pixel], transform: &impl PixelTransform) -> Vec<Pixel> {
    pixels.par_iter().map(|&p| transform.transform(p)).collect()
}

/// Returns a new buffer with `transform` applied to each pixel of `buffer`.
#[must_use]
pub fn map_pixels(buffer: &PixelBuffer, transform: &impl PixelTransform) -> PixelBuffer {
    let (width, height) = buffer.dimensions();
    PixelBuffer::new_unchecked(width, height, map_slice(buffer.pixels(), transform))
}

/// Returns a new buffer with `transform` applied to each pixel of `buffer` in parallel.
#[cfg(feature = "threads")]
#[must_use]
pub fn map_pixels_par(buffer: &PixelBuffer, transform: &impl PixelTransform) -> PixelBuffer {
    let (width, height) = buffer.dimensions();
    PixelBuffer::new_unchecked(width, height, map_slice_par(buffer.pixels(), transform))
}

/// Emits the debug event shared by all buffer operations.
fn log_operation(operation: &str, buffer: &PixelBuffer, parallel: bool) {
    tracing::debug!(
        operation,
        width = buffer.width(),
        height = buffer.height(),
        parallel,
        "transforming pixel buffer"
    );
}

/// Converts each pixel of `buffer` to gray (see [`grayscale`](crate::grayscale)).
#[must_use]
pub fn to_gray(buffer: &PixelBuffer) -> PixelBuffer {
    log_operation("grayscale", buffer, false);
    map_pixels(buffer, &Grayscale)
}

/// Converts each pixel of `buffer` to gray (see [`grayscale`](crate::grayscale)) in parallel.
#[cfg(feature = "threads")]
#[must_use]
pub fn to_gray_par(buffer: &PixelBuffer) -> PixelBuffer {
    log_operation("grayscale", buffer, true);
    map_pixels_par(buffer, &Grayscale)
}

/// Converts each pixel of `buffer` to the given color space.
///
/// All output pixels are fully opaque.
#[must_use]
pub fn convert_color_space(buffer: &PixelBuffer, space: ColorSpace) -> PixelBuffer {
    log_operation(space.name(), buffer, false);
    map_pixels(buffer, &space)
}

/// Converts each pixel of `buffer` to the given color space in parallel.
///
/// All output pixels are fully opaque.
#[cfg(feature = "threads")]
#[must_use]
pub fn convert_color_space_par(buffer: &PixelBuffer, space: ColorSpace) -> PixelBuffer {
    log_operation(space.name(), buffer, true);
    map_pixels_par(buffer, &space)
}

/// Reduces the colors of `buffer` to `red * green * blue` (see [`reduce`](crate::reduce)).
///
/// # Errors
/// Returns [`InvalidArgument::LevelsOutOfRange`] if any level count is not in `1..=256`.
/// The levels are validated before any pixel is processed.
pub fn reduce_colors(
    buffer: &PixelBuffer,
    red: u16,
    green: u16,
    blue: u16,
) -> Result<PixelBuffer, InvalidArgument> {
    let reducer = ColorReducer::new(red, green, blue)?;
    log_operation("reduce", buffer, false);
    Ok(map_pixels(buffer, &reducer))
}

/// Reduces the colors of `buffer` to `red * green * blue` in parallel.
///
/// # Errors
/// Returns [`InvalidArgument::LevelsOutOfRange`] if any level count is not in `1..=256`.
/// The levels are validated before any pixel is processed.
#[cfg(feature = "threads")]
pub fn reduce_colors_par(
    buffer: &PixelBuffer,
    red: u16,
    green: u16,
    blue: u16,
) -> Result<PixelBuffer, InvalidArgument> {
    let reducer = ColorReducer::new(red, green, blue)?;
    log_operation("reduce", buffer, true);
    Ok(map_pixels_par(buffer, &reducer))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{grayscale, tests::*};

    #[test]
    fn shape_is_preserved() {
        for (width, height) in [(0, 0), (0, 5), (1, 1), (7, 3), (64, 17)] {
            let buffer = test_buffer(width, height);
            assert_eq!(to_gray(&buffer).dimensions(), (width, height));
            for space in ColorSpace::ALL {
                assert_eq!(convert_color_space(&buffer, space).dimensions(), (width, height));
            }
            assert_eq!(reduce_colors(&buffer, 3, 4, 5).unwrap().dimensions(), (width, height));
        }
    }

    #[test]
    fn pixels_keep_their_position() {
        let buffer = test_buffer(13, 9);
        let gray = to_gray(&buffer);
        for y in 0..9 {
            for x in 0..13 {
                let expected = grayscale::to_gray(buffer.get(x, y).unwrap());
                assert_eq!(gray.get(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn input_is_unchanged() {
        let buffer = test_buffer(8, 8);
        let copy = buffer.clone();
        let _ = convert_color_space(&buffer, ColorSpace::WideGamut);
        assert_eq!(buffer, copy);
    }

    #[test]
    fn invalid_levels_are_rejected() {
        let buffer = test_buffer(4, 4);
        assert_eq!(
            reduce_colors(&buffer, 2, 0, 2),
            Err(InvalidArgument::LevelsOutOfRange(0))
        );
    }

    #[test]
    fn reduce_identity() {
        let buffer = test_buffer(32, 8);
        assert_eq!(reduce_colors(&buffer, 256, 256, 256).unwrap(), buffer);
    }

    #[cfg(feature = "threads")]
    #[test]
    fn parallel_matches_single_threaded() {
        let buffer = test_buffer(97, 61);

        assert_eq!(to_gray_par(&buffer), to_gray(&buffer));
        for space in ColorSpace::ALL {
            assert_eq!(
                convert_color_space_par(&buffer, space),
                convert_color_space(&buffer, space)
            );
        }
        assert_eq!(
            reduce_colors_par(&buffer, 5, 6, 7).unwrap(),
            reduce_colors(&buffer, 5, 6, 7).unwrap()
        );
        assert_eq!(
            reduce_colors_par(&buffer, 257, 6, 7),
            Err(InvalidArgument::LevelsOutOfRange(257))
        );
    }
}

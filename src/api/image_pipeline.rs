//! Contains the [`ImagePipeline`] builder struct for the high level API.

use crate::{map::map_slice, ColorReducer, InvalidArgument, Operation, Pixel, PixelBuffer};
#[cfg(feature = "threads")]
use crate::map::map_slice_par;
#[cfg(feature = "image")]
use {image::RgbaImage, palette::cast::ComponentsAs};

/// A builder struct to specify the operation to run over an image.
///
/// # Examples
/// To start, create an [`ImagePipeline`] from a [`RgbaImage`] (note that the `image` feature is needed):
/// ```no_run
/// # use gamutshift::ImagePipeline;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?.into_rgba8();
/// let mut pipeline = ImagePipeline::from(&img);
/// # Ok(())
/// # }
/// ```
///
/// Then, choose the operation to perform:
/// ```
/// # use gamutshift::{ImagePipeline, ColorSpace, Pixel};
/// # let pixels = vec![Pixel::new(0, 0, 0, 255)];
/// # let mut pipeline = ImagePipeline::new(&pixels, 1, 1).unwrap();
/// let pipeline = pipeline.operation(ColorSpace::AdobeRgb);
/// ```
///
/// Color reduction takes the number of levels per channel:
/// ```
/// # use gamutshift::{ImagePipeline, InvalidArgument, Pixel};
/// # fn main() -> Result<(), InvalidArgument> {
/// # let pixels = vec![Pixel::new(0, 0, 0, 255)];
/// # let mut pipeline = ImagePipeline::new(&pixels, 1, 1).unwrap();
/// let pipeline = pipeline.reduce_colors(4, 4, 2)?;
/// # Ok(())
/// # }
/// ```
///
/// Finally, run the pipeline:
/// ```no_run
/// # use gamutshift::{ImagePipeline, Pixel};
/// # let pixels = vec![Pixel::new(0, 0, 0, 255)];
/// # let pipeline = ImagePipeline::new(&pixels, 1, 1).unwrap();
/// let image = pipeline.rgbaimage();
/// ```
///
/// Or, in parallel across multiple threads (needs the `threads` feature):
/// ```no_run
/// # use gamutshift::{ImagePipeline, Pixel};
/// # let pixels = vec![Pixel::new(0, 0, 0, 255)];
/// # let pipeline = ImagePipeline::new(&pixels, 1, 1).unwrap();
/// let image = pipeline.rgbaimage_par();
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ImagePipeline<'a> {
    /// The input image as a flat slice of pixels.
    pub(crate) pixels: &'a [Pixel],
    /// The dimensions of the image.
    pub(crate) dimensions: (u32, u32),
    /// The operation to apply to each pixel.
    pub(crate) operation: Operation,
}

impl<'a> ImagePipeline<'a> {
    /// Creates a new [`ImagePipeline`] with default options
    /// and does not validate the size of the input image/slice.
    fn new_unchecked(pixels: &'a [Pixel], width: u32, height: u32) -> Self {
        Self {
            pixels,
            dimensions: (width, height),
            operation: Operation::default(),
        }
    }

    /// Creates a new [`ImagePipeline`] with default options.
    /// Returns `None` if the length of `pixels` is not equal to `width * height`.
    #[must_use]
    pub fn new(pixels: &'a [Pixel], width: u32, height: u32) -> Option<Self> {
        if pixels.len() == width as usize * height as usize {
            Some(Self::new_unchecked(pixels, width, height))
        } else {
            None
        }
    }

    /// Sets the operation to apply to each pixel.
    ///
    /// See [`Operation`] for more details.
    ///
    /// The default operation is [`Operation::Grayscale`].
    pub fn operation(&mut self, operation: impl Into<Operation>) -> &mut Self {
        self.operation = operation.into();
        self
    }

    /// Sets the operation to color reduction with the given number of levels per channel.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::LevelsOutOfRange`] if any level count is not in `1..=256`.
    /// The current operation is left unchanged in that case.
    pub fn reduce_colors(
        &mut self,
        red: u16,
        green: u16,
        blue: u16,
    ) -> Result<&mut Self, InvalidArgument> {
        self.operation = ColorReducer::new(red, green, blue)?.into();
        Ok(self)
    }

    /// Emits the debug event for a pipeline run.
    fn log_run(&self, parallel: bool) {
        let (width, height) = self.dimensions;
        tracing::debug!(
            operation = %self.operation,
            width,
            height,
            parallel,
            "running image pipeline"
        );
    }

    /// Runs the pipeline and returns the transformed pixels.
    #[must_use]
    pub fn buffer(&self) -> PixelBuffer {
        self.log_run(false);
        let (width, height) = self.dimensions;
        PixelBuffer::new_unchecked(width, height, map_slice(self.pixels, &self.operation))
    }
}

impl<'a> From<&'a PixelBuffer> for ImagePipeline<'a> {
    fn from(buffer: &'a PixelBuffer) -> Self {
        let (width, height) = buffer.dimensions();
        Self::new_unchecked(buffer.pixels(), width, height)
    }
}

#[cfg(feature = "image")]
impl<'a> From<&'a RgbaImage> for ImagePipeline<'a> {
    fn from(image: &'a RgbaImage) -> Self {
        let pixels = image.pixels().len();
        let buf = &image.as_raw()[..(pixels * 4)];
        Self::new_unchecked(buf.components_as(), image.width(), image.height())
    }
}

#[cfg(feature = "image")]
impl<'a> ImagePipeline<'a> {
    /// Runs the pipeline and returns the transformed image.
    #[must_use]
    pub fn rgbaimage(&self) -> RgbaImage {
        self.buffer().into()
    }
}

#[cfg(feature = "threads")]
impl<'a> ImagePipeline<'a> {
    /// Runs the pipeline in parallel and returns the transformed pixels.
    #[must_use]
    pub fn buffer_par(&self) -> PixelBuffer {
        self.log_run(true);
        let (width, height) = self.dimensions;
        PixelBuffer::new_unchecked(width, height, map_slice_par(self.pixels, &self.operation))
    }
}

#[cfg(all(feature = "threads", feature = "image"))]
impl<'a> ImagePipeline<'a> {
    /// Runs the pipeline in parallel and returns the transformed image.
    #[must_use]
    pub fn rgbaimage_par(&self) -> RgbaImage {
        self.buffer_par().into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{tests::*, ColorSpace};

    #[test]
    fn rejects_mismatched_length() {
        let pixels = test_pixels(10);
        assert!(ImagePipeline::new(&pixels, 3, 3).is_none());
        assert!(ImagePipeline::new(&pixels, 5, 2).is_some());
    }

    #[test]
    fn default_is_grayscale() {
        let buffer = test_buffer(9, 4);
        let pipeline = ImagePipeline::from(&buffer);
        assert_eq!(pipeline.buffer(), Operation::Grayscale.apply(&buffer));
    }

    #[test]
    fn runs_selected_operation() {
        let buffer = test_buffer(9, 4);
        let mut pipeline = ImagePipeline::from(&buffer);

        pipeline.operation(ColorSpace::WideGamut);
        assert_eq!(
            pipeline.buffer(),
            Operation::ConvertColorSpace(ColorSpace::WideGamut).apply(&buffer)
        );

        pipeline.reduce_colors(3, 3, 3).unwrap();
        assert_eq!(
            pipeline.buffer(),
            Operation::from(ColorReducer::new(3, 3, 3).unwrap()).apply(&buffer)
        );
    }

    #[test]
    fn invalid_levels_keep_operation() {
        let buffer = test_buffer(2, 2);
        let mut pipeline = ImagePipeline::from(&buffer);
        pipeline.operation(ColorSpace::AppleRgb);

        assert!(pipeline.reduce_colors(1, 300, 1).is_err());
        assert_eq!(pipeline.operation, Operation::ConvertColorSpace(ColorSpace::AppleRgb));
    }

    #[cfg(feature = "threads")]
    #[test]
    fn parallel_matches_single_threaded() {
        let buffer = test_buffer(50, 31);
        let mut pipeline = ImagePipeline::from(&buffer);
        pipeline.reduce_colors(7, 2, 9).unwrap();
        assert_eq!(pipeline.buffer_par(), pipeline.buffer());
    }

    #[cfg(feature = "image")]
    #[test]
    fn rgbaimage_keeps_dimensions() {
        let image = RgbaImage::from_pixel(6, 5, image::Rgba([255, 0, 0, 100]));
        let output = ImagePipeline::from(&image).rgbaimage();
        assert_eq!(output.dimensions(), (6, 5));
        assert_eq!(output.get_pixel(5, 4), &image::Rgba([76, 76, 76, 100]));
    }
}

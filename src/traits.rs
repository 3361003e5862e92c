use crate::Pixel;

/// A pure, per-pixel color transformation.
///
/// Implementations must not depend on the position of the pixel or on any other pixel,
/// so a buffer can be transformed in any order and across threads.
pub trait PixelTransform: Sync {
    /// Transforms a single pixel.
    #[must_use]
    fn transform(&self, pixel: Pixel) -> Pixel;
}

impl<T: PixelTransform + ?Sized> PixelTransform for &T {
    #[inline]
    fn transform(&self, pixel: Pixel) -> Pixel {
        (**self).transform(pixel)
    }
}

//! Contains various types needed across the crate.

use crate::MAX_LEVELS;
use palette::{white_point::D50, Srgba};
use std::{error::Error, fmt::Display};
#[cfg(feature = "image")]
use {
    image::RgbaImage,
    palette::cast::{ComponentsAs, IntoComponents},
};

/// A single gamma encoded pixel with 8-bit red, green, blue, and alpha channels.
///
/// The `Srgb` encoding tag of [`Srgba`] is nominal here:
/// input pixels are treated as plain gamma encoded RGB, and output pixels
/// are encoded for whichever [`ColorSpace`](crate::ColorSpace) was requested.
pub type Pixel = Srgba<u8>;

/// A color in the CIE XYZ color space relative to the D50 white point.
pub type Xyz = palette::Xyz<D50, f64>;

/// An error type for arguments that are rejected before any pixel is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The name does not identify a supported color space.
    UnknownColorSpace(String),
    /// A per-channel level count was outside of `1..=256`.
    LevelsOutOfRange(u32),
    /// The number of pixels does not match `width * height`.
    DimensionMismatch {
        /// The pixel count implied by the given dimensions.
        expected: usize,
        /// The number of pixels actually provided.
        received: usize,
    },
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidArgument::UnknownColorSpace(name) => {
                write!(f, "the color space {name} is not supported")
            }
            InvalidArgument::LevelsOutOfRange(levels) => {
                write!(f, "{levels} levels is outside of the range 1..={MAX_LEVELS}")
            }
            InvalidArgument::DimensionMismatch { expected, received } => write!(
                f,
                "expected {expected} pixels for the given dimensions but received {received}"
            ),
        }
    }
}

impl Error for InvalidArgument {}

/// The number of discrete levels to keep for one color channel.
///
/// This is a simple new type wrapper around `u16` with the invariant that it must be
/// in the range `1..=256` (i.e., `Levels::MIN..=Levels::MAX`).
///
/// # Examples
/// Use `try_into` or [`Levels::from_clamped`] to create [`Levels`]:
/// ```
/// # use gamutshift::{Levels, InvalidArgument};
/// # fn main() -> Result<(), InvalidArgument> {
/// let levels = Levels::try_from(8u16)?;
/// let levels: Levels = 16u16.try_into()?;
/// let levels = Levels::from_clamped(1024);
/// assert_eq!(levels, Levels::MAX);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Levels(u16);

impl Levels {
    /// A single level, collapsing the channel to one value.
    pub const MIN: Self = Self(1);

    /// The maximum number of levels (given by [`MAX_LEVELS`]).
    pub const MAX: Self = Self(MAX_LEVELS);

    /// Gets the inner `u16` value.
    #[must_use]
    pub const fn into_inner(self) -> u16 {
        self.0
    }

    /// Creates [`Levels`] by clamping the given `u16` into `1..=256`.
    #[must_use]
    pub const fn from_clamped(value: u16) -> Self {
        if value == 0 {
            Self::MIN
        } else if value <= MAX_LEVELS {
            Self(value)
        } else {
            Self::MAX
        }
    }

    /// The width of each bucket on the `0..=255` channel range.
    ///
    /// This is `255 / levels`, except that `256` levels gives an interval of `1`
    /// instead of `0`.
    #[must_use]
    pub const fn interval(self) -> u16 {
        let interval = u8::MAX as u16 / self.0;
        if interval == 0 {
            1
        } else {
            interval
        }
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<Levels> for u16 {
    fn from(val: Levels) -> Self {
        val.into_inner()
    }
}

impl TryFrom<u16> for Levels {
    type Error = InvalidArgument;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (1..=MAX_LEVELS).contains(&value) {
            Ok(Levels(value))
        } else {
            Err(InvalidArgument::LevelsOutOfRange(value.into()))
        }
    }
}

impl TryFrom<u32> for Levels {
    type Error = InvalidArgument;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map_err(|_| InvalidArgument::LevelsOutOfRange(value))
            .and_then(Levels::try_from)
    }
}

impl Display for Levels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_inner())
    }
}

/// An owned, row-major grid of [`Pixel`]s.
///
/// The length of the pixel data always equals `width * height`.
///
/// # Examples
/// ```
/// # use gamutshift::{PixelBuffer, Pixel, InvalidArgument};
/// # fn main() -> Result<(), InvalidArgument> {
/// let pixels = vec![Pixel::new(255, 0, 0, 255); 6];
/// let buffer = PixelBuffer::new(3, 2, pixels)?;
/// assert_eq!(buffer.get(2, 1), Some(Pixel::new(255, 0, 0, 255)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// The number of columns.
    width: u32,
    /// The number of rows.
    height: u32,
    /// The pixels in row-major order.
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Creates a [`PixelBuffer`] without checking that `pixels.len() == width * height`.
    pub(crate) fn new_unchecked(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        Self { width, height, pixels }
    }

    /// Creates a new [`PixelBuffer`] from row-major pixel data.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::DimensionMismatch`] if the length of `pixels`
    /// is not equal to `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, InvalidArgument> {
        let expected = width as usize * height as usize;
        if pixels.len() == expected {
            Ok(Self::new_unchecked(width, height, pixels))
        } else {
            Err(InvalidArgument::DimensionMismatch { expected, received: pixels.len() })
        }
    }

    /// Creates a new [`PixelBuffer`] by calling `f(x, y)` for each coordinate.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();

        Self::new_unchecked(width, height, pixels)
    }

    /// The number of columns in the buffer.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// The number of rows in the buffer.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The pixels as a flat, row-major slice.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Returns the pixel at column `x` and row `y`, if it is in bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            self.pixels
                .get(y as usize * self.width as usize + x as usize)
                .copied()
        } else {
            None
        }
    }

    /// Consumes the buffer and returns the row-major pixel data.
    #[must_use]
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

impl AsRef<[Pixel]> for PixelBuffer {
    fn as_ref(&self) -> &[Pixel] {
        self.pixels()
    }
}

#[cfg(feature = "image")]
impl From<&RgbaImage> for PixelBuffer {
    fn from(image: &RgbaImage) -> Self {
        let pixels = image.pixels().len();
        let buf: &[Pixel] = image.as_raw()[..(pixels * 4)].components_as();
        Self::new_unchecked(image.width(), image.height(), buf.to_vec())
    }
}

#[cfg(feature = "image")]
impl From<PixelBuffer> for RgbaImage {
    fn from(buffer: PixelBuffer) -> Self {
        let (width, height) = buffer.dimensions();
        let buf: Vec<u8> = buffer.into_pixels().into_components();

        #[allow(clippy::expect_used)]
        {
            // the pixel count of a PixelBuffer is always width * height,
            // so buf is large enough by nature of its construction
            RgbaImage::from_vec(width, height, buf).expect("large enough buffer")
        }
    }
}

//! Uniform color reduction.
//!
//! Each color channel is split into `k` buckets of equal width, and every channel value
//! is replaced with the midpoint of its bucket. Reducing with levels `(kR, kG, kB)`
//! leaves at most `kR * kG * kB` distinct colors in an image.
//!
//! The bucket width (interval) is `255 / k` using integer division, with `k = 256`
//! mapped to an interval of `1` so that it reproduces the input exactly.
//! When `k` does not divide `255`, the last bucket also absorbs the leftover values
//! at the top of the range, so the bucket index always stays below `k`.

use crate::{channel::to_channel, InvalidArgument, Levels, Pixel, PixelTransform, MAX_LEVELS};

/// The bucket grid of a single color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBuckets {
    /// The number of buckets, in `1..=256`.
    levels: u16,
    /// The width of each bucket, in `1..=256`.
    interval: u16,
}

impl ChannelBuckets {
    /// Creates the bucket grid for the given number of levels,
    /// using an interval of [`Levels::interval`].
    #[must_use]
    pub const fn new(levels: Levels) -> Self {
        Self {
            levels: levels.into_inner(),
            interval: levels.interval(),
        }
    }

    /// Creates a bucket grid with an explicit interval.
    ///
    /// This allows reproducing grids other than the default `255 / k` one,
    /// e.g., `256 / k`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::LevelsOutOfRange`] if `interval` is not in `1..=256`.
    pub fn with_interval(levels: Levels, interval: u16) -> Result<Self, InvalidArgument> {
        if (1..=MAX_LEVELS).contains(&interval) {
            Ok(Self { levels: levels.into_inner(), interval })
        } else {
            Err(InvalidArgument::LevelsOutOfRange(interval.into()))
        }
    }

    /// The number of buckets.
    #[must_use]
    pub const fn levels(self) -> u16 {
        self.levels
    }

    /// The width of each bucket.
    #[must_use]
    pub const fn interval(self) -> u16 {
        self.interval
    }

    /// Returns the index of the bucket containing `value`, in `0..levels`.
    #[must_use]
    #[inline]
    pub fn bucket(self, value: u8) -> u16 {
        (u16::from(value) / self.interval).min(self.levels - 1)
    }

    /// Replaces `value` with the midpoint of its bucket.
    #[must_use]
    #[inline]
    pub fn reduce(self, value: u8) -> u8 {
        let index = f64::from(self.bucket(value));
        to_channel((index + 0.5) * f64::from(self.interval) / 255.0)
    }
}

impl From<Levels> for ChannelBuckets {
    fn from(levels: Levels) -> Self {
        Self::new(levels)
    }
}

/// Reduces the number of colors by mapping each channel onto its [`ChannelBuckets`].
///
/// # Examples
/// ```
/// # use gamutshift::{ColorReducer, Pixel, InvalidArgument};
/// # fn main() -> Result<(), InvalidArgument> {
/// let reducer = ColorReducer::new(2, 3, 5)?;
/// assert_eq!(reducer.reduce(Pixel::new(255, 84, 85, 40)), Pixel::new(190, 42, 76, 40));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorReducer {
    /// The red channel grid.
    pub red: ChannelBuckets,
    /// The green channel grid.
    pub green: ChannelBuckets,
    /// The blue channel grid.
    pub blue: ChannelBuckets,
}

impl ColorReducer {
    /// Creates a [`ColorReducer`] keeping `red`, `green`, and `blue` levels per channel.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::LevelsOutOfRange`] if any level count is not in `1..=256`.
    pub fn new(red: u16, green: u16, blue: u16) -> Result<Self, InvalidArgument> {
        Ok(Self::from_levels(
            red.try_into()?,
            green.try_into()?,
            blue.try_into()?,
        ))
    }

    /// Creates a [`ColorReducer`] from already validated [`Levels`].
    #[must_use]
    pub fn from_levels(red: Levels, green: Levels, blue: Levels) -> Self {
        let reducer = Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        };

        tracing::trace!(
            red_interval = reducer.red.interval,
            green_interval = reducer.green.interval,
            blue_interval = reducer.blue.interval,
            "created color reducer"
        );

        reducer
    }

    /// The maximum number of distinct colors this reducer can output.
    #[must_use]
    pub fn max_colors(&self) -> u32 {
        [self.red, self.green, self.blue]
            .iter()
            .map(|c| u32::from(c.levels))
            .product()
    }

    /// Reduces a single pixel. Alpha is left unchanged.
    #[must_use]
    #[inline]
    pub fn reduce(&self, pixel: Pixel) -> Pixel {
        Pixel::new(
            self.red.reduce(pixel.red),
            self.green.reduce(pixel.green),
            self.blue.reduce(pixel.blue),
            pixel.alpha,
        )
    }
}

impl PixelTransform for ColorReducer {
    #[inline]
    fn transform(&self, pixel: Pixel) -> Pixel {
        self.reduce(pixel)
    }
}

//! A library for pixel level color space conversion, grayscale conversion, and color reduction.
//!
//! `gamutshift` converts gamma encoded RGB pixels to Adobe RGB, Apple RGB, or Wide Gamut RGB
//! by way of the device independent CIE XYZ color space (relative to D50).
//! It also converts images to gray with fixed luminance weights
//! and reduces the number of colors in an image by uniform quantization of each channel.
//!
//! Every operation is a pure function of a single pixel,
//! so images can be processed in any order and across threads.
//!
//! # Features
//! To reduce dependencies and compile times, `gamutshift` has several `cargo` features
//! that can be turned off or on:
//! - `pipelines`: exposes a builder struct that serves as the high-level API (more details below).
//! - `threads`: exposes parallel versions of most functions via [`rayon`].
//! - `image`: enables integration with the [`image`] crate.
//!
//! # Low-Level API
//! The per-pixel conversions live in the [`channel`], [`grayscale`], [`xyz`], and [`reduce`]
//! modules and on [`ColorSpace`]. Whole buffers are processed with [`to_gray`],
//! [`convert_color_space`], and [`reduce_colors`] (and their `_par` versions).
//! ```
//! # use gamutshift::{convert_color_space, ColorSpace, Pixel, PixelBuffer, InvalidArgument};
//! # fn main() -> Result<(), InvalidArgument> {
//! let buffer = PixelBuffer::new(2, 1, vec![Pixel::new(0, 0, 0, 255), Pixel::new(165, 42, 42, 255)])?;
//! let adobe = convert_color_space(&buffer, ColorSpace::AdobeRgb);
//! assert_eq!(adobe.get(1, 0), Some(Pixel::new(142, 42, 42, 255)));
//! # Ok(())
//! # }
//! ```
//!
//! # High-Level API
//! To get started with the high-level API, see [`ImagePipeline`].
//! ```no_run
//! # use gamutshift::{ImagePipeline, ColorSpace};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("some image")?.into_rgba8();
//!
//! let converted = ImagePipeline::from(&img)
//!     .operation(ColorSpace::WideGamut)
//!     .rgbaimage_par();
//!
//! let reduced = ImagePipeline::from(&img)
//!     .reduce_colors(8, 8, 4)?
//!     .rgbaimage_par();
//! # Ok(())
//! # }
//! ```
//!
//! Note that some of the options and functions above require certain features to be enabled.
//!
//! # Logging
//! Buffer operations emit [`tracing`] events at the `debug` level.
//! No subscriber is installed by this crate.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::excessive_precision,
    clippy::wildcard_imports
)]

mod colorspace;
mod map;
mod traits;
mod types;

#[cfg(feature = "pipelines")]
mod api;

pub mod channel;
pub mod grayscale;
pub mod reduce;
pub mod xyz;

pub use colorspace::{ColorSpace, RgbProfile};
pub use map::*;
pub use reduce::ColorReducer;
pub use traits::*;
pub use types::*;

#[cfg(feature = "pipelines")]
pub use api::*;

/// The maximum number of levels per channel is `256`.
pub const MAX_LEVELS: u16 = u8::MAX as u16 + 1;

#[cfg(test)]
pub(crate) mod tests {
    //! Shared test fixtures.

    use crate::{Pixel, PixelBuffer};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoroshiro128PlusPlus;

    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);
    pub const BLACK: Pixel = Pixel::new(0, 0, 0, 255);
    pub const RED: Pixel = Pixel::new(255, 0, 0, 255);
    pub const GREEN: Pixel = Pixel::new(0, 128, 0, 255);
    pub const BLUE: Pixel = Pixel::new(0, 0, 255, 255);
    pub const BROWN: Pixel = Pixel::new(165, 42, 42, 255);

    pub fn test_pixels(len: usize) -> Vec<Pixel> {
        let mut rng = Xoroshiro128PlusPlus::seed_from_u64(42);
        (0..len)
            .map(|_| {
                let [r, g, b, a] = rng.gen::<[u8; 4]>();
                Pixel::new(r, g, b, a)
            })
            .collect()
    }

    pub fn test_buffer(width: u32, height: u32) -> PixelBuffer {
        let pixels = test_pixels(width as usize * height as usize);
        PixelBuffer::new_unchecked(width, height, pixels)
    }
}

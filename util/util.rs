#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use gamutshift::{Pixel, PixelBuffer};
use image::RgbaImage;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

/// Set this to a directory of images to benchmark on real photos
/// in addition to the synthetic buffers.
pub const IMAGE_DIR_VAR: &str = "GAMUTSHIFT_BENCH_IMAGES";

pub fn load_images(images: &[PathBuf]) -> Vec<(String, PixelBuffer)> {
    images
        .iter()
        .map(|path| {
            image::open(path).map(|image| {
                (
                    path.file_name().unwrap().to_owned().into_string().unwrap(),
                    PixelBuffer::from(&image.into_rgba8()),
                )
            })
        })
        .collect::<Result<_, _>>()
        .expect("loaded each image")
}

pub fn load_image_dir(dir: impl AsRef<Path>) -> Vec<(String, PixelBuffer)> {
    let mut paths = std::fs::read_dir(dir)
        .expect("read img directory")
        .collect::<Result<Vec<_>, _>>()
        .expect("read each file")
        .iter()
        .map(std::fs::DirEntry::path)
        .collect::<Vec<_>>();

    paths.sort();

    load_images(&paths)
}

/// A buffer of uniformly random pixels.
pub fn noise(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    let pixels = (0..width as usize * height as usize)
        .map(|_| {
            let [r, g, b, a] = rng.gen::<[u8; 4]>();
            Pixel::new(r, g, b, a)
        })
        .collect();

    PixelBuffer::new(width, height, pixels).unwrap()
}

/// A smooth horizontal and vertical gradient, closer to photographic content than noise.
#[allow(clippy::cast_possible_truncation)]
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Pixel::new(r, g, r / 2 + g / 2, 255)
    })
}

fn load_bench_images() -> Vec<(String, PixelBuffer)> {
    let mut images = vec![
        ("noise_1920x1080".to_owned(), noise(1920, 1080, 0)),
        ("gradient_1920x1080".to_owned(), gradient(1920, 1080)),
        ("noise_4096x4096".to_owned(), noise(4096, 4096, 1)),
    ];

    if let Some(dir) = std::env::var_os(IMAGE_DIR_VAR) {
        images.extend(load_image_dir(dir));
    }

    images
}

static BENCH_IMAGES: OnceLock<Vec<(String, PixelBuffer)>> = OnceLock::new();

pub fn bench_images() -> &'static [(String, PixelBuffer)] {
    BENCH_IMAGES.get_or_init(load_bench_images)
}

pub fn to_rgbaimage(buffer: &PixelBuffer) -> RgbaImage {
    buffer.clone().into()
}

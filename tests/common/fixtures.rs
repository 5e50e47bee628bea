//! Test fixtures: input images and requests.

use hqx::models::{Invocation, InvocationRequest};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Dimensions of the standard test sprite.
pub const CAT_WIDTH: u32 = 64;
pub const CAT_HEIGHT: u32 = 48;

/// An RGBA sprite with hard edges, a diagonal and some transparency.
pub fn sprite(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x < width / 4 {
            Rgba([0, 0, 0, 255])
        } else if x > y {
            Rgba([255, 200, 0, 255])
        } else if (x + y) % 7 == 0 {
            Rgba([30, 90, 200, 0])
        } else {
            Rgba([30, 90, 200, 255])
        }
    })
}

/// Write the standard 64x48 sprite as `cat.png` in `dir`.
pub fn write_cat(dir: &Path) -> PathBuf {
    let path = dir.join("cat.png");
    sprite(CAT_WIDTH, CAT_HEIGHT).save(&path).unwrap();
    path
}

/// Write a grey gradient in any container the `image` crate can encode.
pub fn write_gradient(path: &Path, width: u32, height: u32) {
    GrayImage::from_fn(width, height, |x, y| Luma([((x * 255) / width.max(1)) as u8 ^ y as u8]))
        .save(path)
        .unwrap();
}

/// Parse tokens that are expected to form a valid conversion request.
pub fn request(tokens: &[&str]) -> InvocationRequest {
    match InvocationRequest::parse_args(tokens) {
        Ok(Invocation::Convert(request)) => request,
        other => panic!("expected a conversion request for {tokens:?}, got {other:?}"),
    }
}

/// Expected synthesized output next to `input`.
pub fn output_for(input: &Path, factor: u32) -> PathBuf {
    PathBuf::from(format!("{}_hq{factor}x.png", input.display()))
}

/// Files currently in `dir`, sorted by name.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

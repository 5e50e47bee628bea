//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert `path` is a PNG file of the given dimensions.
pub fn assert_png_file(path: &Path, width: u32, height: u32) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output file {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );

    let image = image::load_from_memory(&bytes).unwrap();
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "Unexpected dimensions for {}",
        path.display()
    );
    assert_eq!(image.color(), image::ColorType::Rgba8);
}

/// Assert nothing exists at `path`.
pub fn assert_absent(path: &Path) {
    assert!(!path.exists(), "Expected no file at {}", path.display());
}

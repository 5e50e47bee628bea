//! In-memory pixel buffers.
//!
//! [`DecodedImage`] is whatever the codec produced, in its native layout.
//! [`PixelBuffer`] is the canonical packed-ARGB form every upscaler expects;
//! [`DecodedImage::normalize`] is the only way from one to the other.

use crate::error::LayoutMismatch;

/// Pack 8-bit channels into `0xAARRGGBB`.
#[inline]
pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([a, r, g, b])
}

/// A rectangular grid of packed `0xAARRGGBB` pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Wrap existing pixels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A fully transparent buffer, or `None` if the pixel count overflows.
    pub fn blank(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        Some(Self::new(width, height, vec![0; len]))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Unpack to `[R, G, B, A, ...]` bytes for encoding.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &argb in &self.pixels {
            let [a, r, g, b] = argb.to_be_bytes();
            rgba.extend_from_slice(&[r, g, b, a]);
        }
        rgba
    }
}

/// Pixel storage as produced by a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelLayout {
    /// Already canonical: one `0xAARRGGBB` value per pixel.
    PackedArgb(Vec<u32>),
    /// `[R, G, B, A]` bytes per pixel.
    Rgba8(Vec<u8>),
    /// `[R, G, B]` bytes per pixel, opaque.
    Rgb8(Vec<u8>),
    /// One grey byte per pixel, opaque.
    Luma8(Vec<u8>),
    /// `[grey, A]` bytes per pixel.
    LumaA8(Vec<u8>),
}

impl PixelLayout {
    pub fn name(&self) -> &'static str {
        match self {
            PixelLayout::PackedArgb(_) => "argb32",
            PixelLayout::Rgba8(_) => "rgba8",
            PixelLayout::Rgb8(_) => "rgb8",
            PixelLayout::Luma8(_) => "luma8",
            PixelLayout::LumaA8(_) => "luma-alpha8",
        }
    }

    /// Samples making up one pixel.
    pub fn samples_per_pixel(&self) -> usize {
        match self {
            PixelLayout::PackedArgb(_) | PixelLayout::Luma8(_) => 1,
            PixelLayout::LumaA8(_) => 2,
            PixelLayout::Rgb8(_) => 3,
            PixelLayout::Rgba8(_) => 4,
        }
    }

    /// Total samples held.
    pub fn sample_count(&self) -> usize {
        match self {
            PixelLayout::PackedArgb(pixels) => pixels.len(),
            PixelLayout::Rgba8(bytes)
            | PixelLayout::Rgb8(bytes)
            | PixelLayout::Luma8(bytes)
            | PixelLayout::LumaA8(bytes) => bytes.len(),
        }
    }
}

/// A decoded image in its native layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            width,
            height,
            layout,
        }
    }

    /// Whether the pixels are already packed ARGB.
    pub fn is_canonical(&self) -> bool {
        matches!(self.layout, PixelLayout::PackedArgb(_))
    }

    /// Convert to canonical packed ARGB.
    ///
    /// Colour channels are carried over unchanged; layouts without alpha
    /// become fully opaque. A buffer that is already packed ARGB is moved
    /// through without touching a single pixel.
    ///
    /// Fails when the sample data does not cover exactly
    /// `width * height` pixels.
    pub fn normalize(self) -> Result<PixelBuffer, LayoutMismatch> {
        let expected = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(self.layout.samples_per_pixel()));
        let actual = self.layout.sample_count();
        if expected != Some(actual) {
            return Err(LayoutMismatch {
                layout: self.layout.name(),
                width: self.width,
                height: self.height,
                expected: expected.unwrap_or(usize::MAX),
                actual,
            });
        }

        let pixels = match self.layout {
            PixelLayout::PackedArgb(pixels) => pixels,
            PixelLayout::Rgba8(bytes) => bytes
                .chunks_exact(4)
                .map(|p| pack_argb(p[3], p[0], p[1], p[2]))
                .collect(),
            PixelLayout::Rgb8(bytes) => bytes
                .chunks_exact(3)
                .map(|p| pack_argb(0xFF, p[0], p[1], p[2]))
                .collect(),
            PixelLayout::Luma8(bytes) => bytes
                .iter()
                .map(|&l| pack_argb(0xFF, l, l, l))
                .collect(),
            PixelLayout::LumaA8(bytes) => bytes
                .chunks_exact(2)
                .map(|p| pack_argb(p[1], p[0], p[0], p[0]))
                .collect(),
        };
        Ok(PixelBuffer::new(self.width, self.height, pixels))
    }
}

impl From<PixelBuffer> for DecodedImage {
    fn from(buffer: PixelBuffer) -> Self {
        DecodedImage::new(
            buffer.width,
            buffer.height,
            PixelLayout::PackedArgb(buffer.pixels),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pack_argb() {
        assert_eq!(pack_argb(0xFF, 0x12, 0x34, 0x56), 0xFF12_3456);
        assert_eq!(pack_argb(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_blank_dimensions() {
        let buffer = PixelBuffer::blank(128, 96).unwrap();
        assert_eq!(buffer.width(), 128);
        assert_eq!(buffer.height(), 96);
        assert_eq!(buffer.pixels().len(), 128 * 96);
        assert!(buffer.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_to_rgba8_byte_order() {
        let buffer = PixelBuffer::new(2, 1, vec![0x80FF_0000, 0xFF00_00FF]);
        assert_eq!(buffer.to_rgba8(), vec![0xFF, 0, 0, 0x80, 0, 0, 0xFF, 0xFF]);
    }

    #[test]
    fn test_normalize_packed_argb_is_identity() {
        let pixels = vec![0x0000_0000, 0x80FF_8040, 0xFF12_3456, 0x01FE_FDFC];
        let image = DecodedImage::new(2, 2, PixelLayout::PackedArgb(pixels.clone()));
        assert!(image.is_canonical());

        let once = image.normalize().unwrap();
        assert_eq!(once.pixels(), pixels.as_slice());

        let twice = DecodedImage::from(once.clone()).normalize().unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_normalize_rgba8_keeps_alpha() {
        let image = DecodedImage::new(
            2,
            1,
            PixelLayout::Rgba8(vec![10, 20, 30, 40, 255, 128, 0, 255]),
        );
        assert!(!image.is_canonical());
        let buffer = image.normalize().unwrap();
        assert_eq!(buffer.pixels(), &[0x280A_141Eu32, 0xFFFF_8000]);
    }

    #[test]
    fn test_normalize_rgb8_is_opaque_and_exact() {
        let image = DecodedImage::new(1, 2, PixelLayout::Rgb8(vec![1, 2, 3, 250, 251, 252]));
        let buffer = image.normalize().unwrap();
        assert_eq!(buffer.pixels(), &[0xFF01_0203u32, 0xFFFA_FBFC]);
    }

    #[test]
    fn test_normalize_luma() {
        let image = DecodedImage::new(2, 1, PixelLayout::Luma8(vec![0, 200]));
        assert_eq!(image.normalize().unwrap().pixels(), &[0xFF00_0000u32, 0xFFC8_C8C8]);

        let image = DecodedImage::new(1, 1, PixelLayout::LumaA8(vec![100, 50]));
        assert_eq!(image.normalize().unwrap().pixels(), &[0x3264_6464u32]);
    }

    #[test]
    fn test_rgba8_survives_normalize_and_unpack() {
        let bytes = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buffer = DecodedImage::new(3, 1, PixelLayout::Rgba8(bytes.clone()))
            .normalize()
            .unwrap();
        assert_eq!(buffer.to_rgba8(), bytes);
    }

    #[test]
    fn test_normalize_rejects_short_packed_data() {
        let image = DecodedImage::new(4, 4, PixelLayout::PackedArgb(vec![0xFF00_0000; 15]));
        assert_eq!(
            image.normalize(),
            Err(LayoutMismatch {
                layout: "argb32",
                width: 4,
                height: 4,
                expected: 16,
                actual: 15,
            })
        );
    }

    #[test]
    fn test_normalize_rejects_partial_pixels() {
        // A trailing half pixel must not be silently dropped
        let image = DecodedImage::new(2, 1, PixelLayout::Rgb8(vec![1, 2, 3, 4, 5, 6, 7]));
        let error = image.normalize().unwrap_err();
        assert_eq!((error.expected, error.actual), (6, 7));

        let image = DecodedImage::new(1, 1, PixelLayout::LumaA8(vec![9]));
        assert!(image.normalize().is_err());
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(PixelLayout::PackedArgb(vec![]).name(), "argb32");
        assert_eq!(PixelLayout::Rgb8(vec![]).name(), "rgb8");
    }
}

use crate::error::ConvertError;
use crate::models::{DecodedImage, PixelBuffer, PixelLayout};
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Reads images into memory and writes results back to disk.
pub trait ImageCodec {
    /// Decode the file at `path`, keeping the decoder's pixel layout.
    fn decode(&self, path: &Path) -> Result<DecodedImage, ConvertError>;

    /// Write `image` to `path` as a lossless PNG.
    fn encode(&self, image: &PixelBuffer, path: &Path) -> Result<(), ConvertError>;
}

/// Decodes anything the `image` crate understands; encodes RGBA8 PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl PngCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for PngCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage, ConvertError> {
        let decode_error = |reason: String| ConvertError::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let image = ImageReader::open(path)
            .map_err(|e| decode_error(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;

        let (width, height) = (image.width(), image.height());
        let layout = match image {
            DynamicImage::ImageRgba8(buf) => PixelLayout::Rgba8(buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => PixelLayout::Rgb8(buf.into_raw()),
            DynamicImage::ImageLuma8(buf) => PixelLayout::Luma8(buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => PixelLayout::LumaA8(buf.into_raw()),
            // 16-bit and float images are reduced to 8 bits per channel
            other => PixelLayout::Rgba8(other.to_rgba8().into_raw()),
        };

        tracing::debug!(
            path = %path.display(),
            width,
            height,
            layout = layout.name(),
            "Decoded image"
        );

        Ok(DecodedImage::new(width, height, layout))
    }

    fn encode(&self, image: &PixelBuffer, path: &Path) -> Result<(), ConvertError> {
        let encode_error = |reason: String| ConvertError::Encode {
            path: path.to_path_buf(),
            reason,
        };

        let mut data = Vec::new();
        let mut encoder = png::Encoder::new(&mut data, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);

        let mut writer = encoder
            .write_header()
            .map_err(|e| encode_error(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgba8())
            .map_err(|e| encode_error(e.to_string()))?;
        writer.finish().map_err(|e| encode_error(e.to_string()))?;

        // Nothing touches the disk until the whole PNG is in memory
        let mut file = File::create(path).map_err(|e| encode_error(e.to_string()))?;
        if let Err(e) = file.write_all(&data).and_then(|()| file.flush()) {
            drop(file);
            if let Err(cleanup) = std::fs::remove_file(path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %cleanup,
                    "Could not remove partial output"
                );
            }
            return Err(encode_error(e.to_string()));
        }

        tracing::debug!(path = %path.display(), bytes = data.len(), "Encoded PNG");
        Ok(())
    }
}

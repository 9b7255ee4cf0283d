// manna-artia/src/processors/saver.rs
use crate::core::{ArtiaError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

pub struct Saver {
    quality: u8,
}

impl Saver {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let format = self.detect_format(path)?;
        self.save_with_format(image, path, format)
    }

    pub fn save_with_format(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<()> {
        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = self.encode(image, format)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&bytes)?;
        writer.flush()?;

        log::info!("Saved image: {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    pub fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        match format {
            ImageFormat::Jpeg => {
                // JPEG has no alpha channel.
                let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
                let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
                rgb.write_with_encoder(encoder)?;
            }
            _ => image.write_to(&mut buffer, format)?,
        }

        Ok(buffer.into_inner())
    }

    fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(ImageFormat::Png),
            Some(_) => ImageFormat::from_path(path).map_err(|_| {
                ArtiaError::UnsupportedFormat(format!(
                    "Cannot write format for: {}",
                    path.display()
                ))
            }),
        }
    }
}

impl Default for Saver {
    fn default() -> Self {
        Self::new(90)
    }
}

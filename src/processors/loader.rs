// manna-artia/src/processors/loader.rs
use crate::core::{ArtiaError, Result};
use crate::utils::image_format_to_string;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

/// Decodes submitted images and refuses rasters above a size limit.
#[derive(Clone)]
pub struct Loader {
    max_dimensions: Option<(u32, u32)>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: Some((100_000, 100_000)),
        }
    }

    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = Some((width, height));
        self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        let bytes = self.read_file(path)?;
        let image = self.decode(&bytes)?;

        log::info!(
            "Loaded {}: {}x{} pixels, {:?}",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }

    pub fn load_from_bytes(&self, data: &[u8]) -> Result<DynamicImage> {
        if data.is_empty() {
            return Err(ArtiaError::InvalidParameter("Image buffer is empty".to_string()));
        }
        self.decode(data)
    }

    /// Header-only probe: dimensions and container format name.
    pub fn get_dimensions_and_format(&self, path: &Path) -> Result<(u32, u32, String)> {
        self.read_file(path)?;

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader
            .format()
            .map(image_format_to_string)
            .unwrap_or_else(|| "Unknown".to_string());
        let (width, height) = reader.into_dimensions()?;

        Ok((width, height, format))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.is_file() {
            return Err(ArtiaError::InvalidParameter(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(ArtiaError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }
        Ok(bytes)
    }

    fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        log::debug!("Decoding {} bytes", data.len());

        let image = image::load_from_memory(data)
            .map_err(|e| ArtiaError::ProcessingError(format!("Failed to decode image: {}", e)))?;

        if let Some((max_w, max_h)) = self.max_dimensions {
            let (width, height) = image.dimensions();
            if width > max_w || height > max_h {
                return Err(ArtiaError::MemoryLimitExceeded(format!(
                    "Image dimensions {}x{} exceed maximum {}x{}",
                    width, height, max_w, max_h
                )));
            }
        }

        Ok(image)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_bytes_and_limit_share_decode() {
        let bytes = png_bytes(30, 10);

        assert_eq!(Loader::new().load_from_bytes(&bytes).unwrap().dimensions(), (30, 10));
        assert!(matches!(
            Loader::new().with_max_dimensions(20, 20).load_from_bytes(&bytes),
            Err(ArtiaError::MemoryLimitExceeded(_))
        ));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(matches!(
            Loader::new().load_from_bytes(b"not an image"),
            Err(ArtiaError::ProcessingError(_))
        ));
        assert!(matches!(
            Loader::new().load_from_bytes(&[]),
            Err(ArtiaError::InvalidParameter(_))
        ));
    }
}

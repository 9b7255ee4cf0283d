// manna-artia/src/processors/resizer.rs
use crate::core::{ResizeAlgorithm, DEFAULT_DISPLAY_WIDTH};
use image::{imageops::FilterType, DynamicImage, GenericImageView};
use std::borrow::Cow;

pub struct Resizer {
    algorithm: ResizeAlgorithm,
    max_width: u32,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm, max_width: u32) -> Self {
        Self { algorithm, max_width }
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Bounds the image to the display width. Narrow images are borrowed as-is.
    pub fn resize_for_display<'a>(&self, image: &'a DynamicImage) -> Cow<'a, DynamicImage> {
        let (orig_width, orig_height) = image.dimensions();

        match self.display_dimensions(orig_width, orig_height) {
            None => {
                log::debug!("Image width {} fits display, skipping resize", orig_width);
                Cow::Borrowed(image)
            }
            Some((width, height)) => {
                log::debug!(
                    "Resizing image from {}x{} to {}x{}",
                    orig_width,
                    orig_height,
                    width,
                    height
                );
                Cow::Owned(image.resize_exact(width, height, self.get_filter_type()))
            }
        }
    }

    fn display_dimensions(&self, orig_width: u32, orig_height: u32) -> Option<(u32, u32)> {
        if self.max_width == 0 || orig_width <= self.max_width {
            return None;
        }

        let ratio = self.max_width as f64 / orig_width as f64;
        let height = (orig_height as f64 * ratio).round() as u32;
        Some((self.max_width, height.max(1)))
    }

    fn get_filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResizeAlgorithm::Bicubic, DEFAULT_DISPLAY_WIDTH)
    }
}

pub fn resize_for_display(image: &DynamicImage, max_width: u32) -> Cow<'_, DynamicImage> {
    Resizer::new(ResizeAlgorithm::Bicubic, max_width).resize_for_display(image)
}

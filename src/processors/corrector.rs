// manna-artia/src/processors/corrector.rs
use crate::core::{ArtiaError, Result};
use crate::processors::advisor::LumaStats;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use imageproc::map::map_colors;

pub const BRIGHTNESS_FACTOR: f32 = 1.3;
pub const CONTRAST_FACTOR: f32 = 1.2;

/// `base + factor * (value - base)`, clamped and truncated.
fn blend(base: f32, value: u8, factor: f32) -> u8 {
    (base + factor * (value as f32 - base)).clamp(0.0, 255.0) as u8
}

fn enhance(image: &RgbaImage, base: f32, factor: f32) -> RgbaImage {
    map_colors(image, |Rgba([r, g, b, a])| {
        Rgba([
            blend(base, r, factor),
            blend(base, g, factor),
            blend(base, b, factor),
            a,
        ])
    })
}

pub struct Corrector {
    brightness: f32,
    contrast: f32,
}

impl Corrector {
    pub fn new() -> Self {
        Self {
            brightness: BRIGHTNESS_FACTOR,
            contrast: CONTRAST_FACTOR,
        }
    }

    /// Brightness then contrast, on a fresh copy.
    pub fn auto_correct(&self, image: &DynamicImage) -> Result<DynamicImage> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ArtiaError::EmptyImage);
        }

        log::debug!(
            "Auto-correcting {}x{} image (brightness x{}, contrast x{})",
            width,
            height,
            self.brightness,
            self.contrast
        );

        let has_alpha = image.color().has_alpha();

        let brightened = enhance(&image.to_rgba8(), 0.0, self.brightness);

        let gray = DynamicImage::ImageRgba8(brightened.clone()).to_luma8();
        let mean = (LumaStats::of(&gray).mean + 0.5).floor() as f32;
        let corrected = enhance(&brightened, mean, self.contrast);

        let corrected = DynamicImage::ImageRgba8(corrected);
        if has_alpha {
            Ok(corrected)
        } else {
            Ok(DynamicImage::ImageRgb8(corrected.to_rgb8()))
        }
    }
}

impl Default for Corrector {
    fn default() -> Self {
        Self::new()
    }
}

pub fn auto_correct(image: &DynamicImage) -> Result<DynamicImage> {
    Corrector::new().auto_correct(image)
}

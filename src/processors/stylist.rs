// manna-artia/src/processors/stylist.rs
use crate::core::StyleSelector;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::map_colors;

pub const SEPIA_DARK: Rgb<u8> = Rgb([0x70, 0x42, 0x14]);
pub const SEPIA_LIGHT: Rgb<u8> = Rgb([0xC0, 0xA0, 0x80]);
pub const POSTERIZE_BITS: u8 = 3;

/// Negated contour kernel; the result is inverted afterwards to get offset 255.
const CONTOUR_KERNEL: [f32; 9] = [1.0, 1.0, 1.0, 1.0, -8.0, 1.0, 1.0, 1.0, 1.0];

pub struct Stylist;

impl Stylist {
    pub fn new() -> Self {
        Self
    }

    pub fn apply_style(&self, image: &DynamicImage, selector: StyleSelector) -> DynamicImage {
        log::debug!("Applying style {:?}", selector);

        match selector {
            StyleSelector::None => image.clone(),
            StyleSelector::Sepia => {
                DynamicImage::ImageRgb8(colorize(&image.to_luma8(), SEPIA_DARK, SEPIA_LIGHT))
            }
            StyleSelector::Grayscale => DynamicImage::ImageRgb8(
                DynamicImage::ImageLuma8(image.to_luma8()).to_rgb8(),
            ),
            StyleSelector::Posterize => {
                DynamicImage::ImageRgb8(posterize(&image.to_rgb8(), POSTERIZE_BITS))
            }
            StyleSelector::Sketch => DynamicImage::ImageRgb8(contour(&image.to_rgb8())),
        }
    }

    /// Label-driven entry point for callers holding user text.
    pub fn apply_labeled(&self, image: &DynamicImage, label: &str) -> DynamicImage {
        self.apply_style(image, StyleSelector::from_label(label))
    }
}

impl Default for Stylist {
    fn default() -> Self {
        Self::new()
    }
}

pub fn apply_style(image: &DynamicImage, selector: StyleSelector) -> DynamicImage {
    Stylist::new().apply_style(image, selector)
}

/// Maps black to `dark` and white to `light` along a per-channel ramp.
pub fn colorize(gray: &GrayImage, dark: Rgb<u8>, light: Rgb<u8>) -> RgbImage {
    let ramp = |level: u8, c: usize| -> u8 {
        let lo = dark[c] as i32;
        let hi = light[c] as i32;
        (lo + level as i32 * (hi - lo) / 255) as u8
    };

    map_colors(gray, |Luma([l])| Rgb([ramp(l, 0), ramp(l, 1), ramp(l, 2)]))
}

pub fn posterize(image: &RgbImage, bits: u8) -> RgbImage {
    let bits = bits.clamp(1, 8);
    let mask = !(0xFFu8.checked_shr(bits as u32).unwrap_or(0));

    map_colors(image, |Rgb([r, g, b])| Rgb([r & mask, g & mask, b & mask]))
}

/// Contour filter over every pixel; the border repeats the edge pixels.
pub fn contour(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    let padded = RgbImage::from_fn(width + 2, height + 2, |x, y| {
        let sx = x.saturating_sub(1).min(width - 1);
        let sy = y.saturating_sub(1).min(height - 1);
        *image.get_pixel(sx, sy)
    });

    let mut edges = DynamicImage::ImageRgb8(padded).filter3x3(&CONTOUR_KERNEL);
    edges.invert();
    edges.crop_imm(1, 1, width, height).to_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posterize_mask() {
        let img = RgbImage::from_pixel(1, 1, Rgb([255, 0x3F, 0x20]));
        assert_eq!(posterize(&img, 3).get_pixel(0, 0), &Rgb([0xE0, 0x20, 0x20]));
        assert_eq!(posterize(&img, 8).get_pixel(0, 0), &Rgb([255, 0x3F, 0x20]));
        assert_eq!(posterize(&img, 1).get_pixel(0, 0), &Rgb([0x80, 0, 0]));
    }

    #[test]
    fn test_colorize_endpoints() {
        let mut gray = GrayImage::new(2, 1);
        gray.put_pixel(1, 0, Luma([255]));
        let out = colorize(&gray, SEPIA_DARK, SEPIA_LIGHT);
        assert_eq!(out.get_pixel(0, 0), &SEPIA_DARK);
        assert_eq!(out.get_pixel(1, 0), &SEPIA_LIGHT);
    }

    #[test]
    fn test_contour_marks_edge() {
        let mut img = RgbImage::from_pixel(5, 5, Rgb([0, 0, 0]));
        img.put_pixel(2, 2, Rgb([255, 255, 255]));
        let out = contour(&img);
        // The bright pixel outweighs its dark neighbours and stays white,
        // while its neighbours see a negative response and go dark.
        assert_eq!(out.get_pixel(2, 2), &Rgb([255, 255, 255]));
        assert_eq!(out.get_pixel(1, 2), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_contour_keeps_border_edges() {
        let img = RgbImage::from_fn(5, 5, |x, _| {
            if x == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let out = contour(&img);

        for y in 0..5 {
            assert_eq!(out.get_pixel(0, y), &Rgb([0, 0, 0]));
            assert_eq!(out.get_pixel(4, y), &Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn test_contour_of_tiny_checkerboard() {
        let img = RgbImage::from_fn(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let out = contour(&img);

        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(1, 1), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }
}

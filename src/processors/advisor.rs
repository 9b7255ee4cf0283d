// manna-artia/src/processors/advisor.rs
use crate::core::{QualityReport, Suggestion};
use image::{DynamicImage, GrayImage};
use imageproc::stats::histogram;

pub const DARK_THRESHOLD: f64 = 60.0;
pub const BRIGHT_THRESHOLD: f64 = 200.0;
pub const LOW_CONTRAST_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaStats {
    pub mean: f64,
    pub stddev: f64,
}

impl LumaStats {
    pub fn of(gray: &GrayImage) -> Self {
        let hist = &histogram(gray).channels[0];

        let count: u64 = hist.iter().map(|&n| n as u64).sum();
        if count == 0 {
            return Self { mean: 0.0, stddev: 0.0 };
        }

        let (sum, sum_sq) = hist.iter().enumerate().fold((0.0, 0.0), |(s, sq), (level, &n)| {
            let v = level as f64;
            (s + v * n as f64, sq + v * v * n as f64)
        });

        let mean = sum / count as f64;
        let variance = (sum_sq / count as f64 - mean * mean).max(0.0);

        Self { mean, stddev: variance.sqrt() }
    }
}

pub struct Advisor;

impl Advisor {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, image: &DynamicImage) -> QualityReport {
        let stats = LumaStats::of(&image.to_luma8());

        let mut suggestions = Vec::new();

        if stats.mean < DARK_THRESHOLD {
            suggestions.push(Suggestion::TooDark);
        } else if stats.mean > BRIGHT_THRESHOLD {
            suggestions.push(Suggestion::TooBright);
        }

        if stats.stddev < LOW_CONTRAST_THRESHOLD {
            suggestions.push(Suggestion::LowContrast);
        }

        if suggestions.is_empty() {
            suggestions.push(Suggestion::Acceptable);
        }

        log::debug!(
            "Brightness {:.1}, contrast {:.1}: {:?}",
            stats.mean,
            stats.stddev,
            suggestions
        );

        QualityReport {
            brightness: stats.mean,
            contrast: stats.stddev,
            suggestions,
        }
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn assess(image: &DynamicImage) -> QualityReport {
    Advisor::new().assess(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_stats_of_two_levels() {
        let mut gray = GrayImage::new(2, 1);
        gray.put_pixel(0, 0, Luma([0]));
        gray.put_pixel(1, 0, Luma([200]));

        let stats = LumaStats::of(&gray);
        assert_eq!(stats.mean, 100.0);
        assert!((stats.stddev - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_of_empty_image() {
        let stats = LumaStats::of(&GrayImage::new(0, 0));
        assert_eq!(stats, LumaStats { mean: 0.0, stddev: 0.0 });
    }

    #[test]
    fn test_dark_and_flat_emit_both() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([20])));
        let report = assess(&image);
        assert_eq!(report.suggestions, vec![Suggestion::TooDark, Suggestion::LowContrast]);
    }
}

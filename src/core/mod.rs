// manna-artia/src/core/mod.rs
pub mod orchestrator;

use image::DynamicImage;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_DISPLAY_WIDTH: u32 = 600;
pub const NO_IMAGE_CAPTION: &str = "Nenhuma imagem enviada.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleSelector {
    #[default]
    None,
    Sepia,
    Grayscale,
    Posterize,
    Sketch,
}

impl StyleSelector {
    pub const ALL: [StyleSelector; 5] = [
        StyleSelector::None,
        StyleSelector::Sepia,
        StyleSelector::Grayscale,
        StyleSelector::Posterize,
        StyleSelector::Sketch,
    ];

    /// Display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            StyleSelector::None => "Nenhum",
            StyleSelector::Sepia => "Sépia",
            StyleSelector::Grayscale => "Preto e Branco",
            StyleSelector::Posterize => "Posterização",
            StyleSelector::Sketch => "Sketch",
        }
    }

    /// Short ascii name, used in generated file names.
    pub fn slug(&self) -> &'static str {
        match self {
            StyleSelector::None => "none",
            StyleSelector::Sepia => "sepia",
            StyleSelector::Grayscale => "grayscale",
            StyleSelector::Posterize => "posterize",
            StyleSelector::Sketch => "sketch",
        }
    }

    /// Parses a user label. Anything unrecognized falls back to `None`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "sepia" | "sépia" => StyleSelector::Sepia,
            "grayscale" | "greyscale" | "preto e branco" => StyleSelector::Grayscale,
            "posterize" | "posterização" | "posterizacao" => StyleSelector::Posterize,
            "sketch" => StyleSelector::Sketch,
            "none" | "nenhum" => StyleSelector::None,
            other => {
                log::debug!("Unknown style label {:?}, using no style", other);
                StyleSelector::None
            }
        }
    }
}

impl FromStr for StyleSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for StyleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    TooDark,
    TooBright,
    LowContrast,
    Acceptable,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::TooDark => "A imagem parece escura. Tente aumentar o brilho.",
            Suggestion::TooBright => "A imagem está muito clara. Reduza o brilho.",
            Suggestion::LowContrast => "A imagem tem pouco contraste. Experimente aumentá-lo.",
            Suggestion::Acceptable => {
                "A imagem parece boa. Você pode aplicar um estilo artístico se desejar."
            }
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Suggestions for one image, brightness first, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub brightness: f64,
    pub contrast: f64,
    pub suggestions: Vec<Suggestion>,
}

impl QualityReport {
    pub fn messages(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(Suggestion::message).collect()
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}

/// What the finishing stage (correction then style) produced.
#[derive(Debug)]
pub enum StyleOutcome {
    Styled(DynamicImage),
    Unstyled(ArtiaError),
}

impl StyleOutcome {
    pub fn into_image(self) -> Option<DynamicImage> {
        match self {
            StyleOutcome::Styled(image) => Some(image),
            StyleOutcome::Unstyled(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct ProcessOutput {
    pub caption: String,
    pub report: String,
    pub quality: Option<QualityReport>,
    pub styled: Option<DynamicImage>,
}

impl ProcessOutput {
    pub fn empty() -> Self {
        Self {
            caption: NO_IMAGE_CAPTION.to_string(),
            report: String::new(),
            quality: None,
            styled: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_width: u32,
    pub algorithm: ResizeAlgorithm,
    pub max_dimensions: Option<(u32, u32)>,
    pub jpeg_quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_DISPLAY_WIDTH,
            algorithm: ResizeAlgorithm::Bicubic,
            max_dimensions: Some((100_000, 100_000)),
            jpeg_quality: 90,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_width > 100_000 {
            return Err(ArtiaError::InvalidParameter(
                "Display width too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(ArtiaError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        if let Some((w, h)) = self.max_dimensions {
            if w == 0 || h == 0 {
                return Err(ArtiaError::InvalidParameter(
                    "Maximum dimensions must be non-zero".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ArtiaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),

    #[error("Memory limit exceeded: {0}")]
    MemoryLimitExceeded(String),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Caption error: {0}")]
    Caption(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ArtiaError>;

pub fn validate_config(config: &PipelineConfig) -> Result<()> {
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for style in StyleSelector::ALL {
            assert_eq!(StyleSelector::from_label(style.label()), style);
            assert_eq!(StyleSelector::from_label(style.slug()), style);
        }
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(StyleSelector::from_label("Aquarela"), StyleSelector::None);
        assert_eq!("".parse::<StyleSelector>().unwrap(), StyleSelector::None);
        assert_eq!(" SEPIA ".parse::<StyleSelector>().unwrap(), StyleSelector::Sepia);
    }

    #[test]
    fn test_report_joins_with_space() {
        let report = QualityReport {
            brightness: 10.0,
            contrast: 0.0,
            suggestions: vec![Suggestion::TooDark, Suggestion::LowContrast],
        };
        assert_eq!(
            report.to_string(),
            format!("{} {}", Suggestion::TooDark, Suggestion::LowContrast)
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(PipelineConfig::default().validate().is_ok());

        let bad_quality = PipelineConfig { jpeg_quality: 0, ..Default::default() };
        assert!(bad_quality.validate().is_err());

        let bad_limit = PipelineConfig { max_dimensions: Some((0, 10)), ..Default::default() };
        assert!(bad_limit.validate().is_err());
    }
}

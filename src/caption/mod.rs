// manna-artia/src/caption/mod.rs
//! Caption pipeline: an image captioner followed by a translator.
//!
//! Both halves are traits so the model backend can be swapped. The
//! [`OllamaClient`] talks to an Ollama-compatible server; [`StaticCaptioner`]
//! and [`IdentityTranslator`] run without any model.

mod ollama;

pub use ollama::OllamaClient;

use crate::core::{ArtiaError, Result};
use image::DynamicImage;
use std::sync::Arc;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_CAPTION_MODEL: &str = "llava";
pub const DEFAULT_TRANSLATION_MODEL: &str = "llama3";
pub const DEFAULT_TARGET_LANGUAGE: &str = "Portuguese";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub trait Captioner: Send + Sync {
    /// Describes the image in the source language (English).
    fn caption(&self, image: &DynamicImage) -> Result<String>;
}

pub trait Translator: Send + Sync {
    /// Translates source-language text into the target language.
    fn translate(&self, text: &str) -> Result<String>;
}

impl<T: Captioner + ?Sized> Captioner for Arc<T> {
    fn caption(&self, image: &DynamicImage) -> Result<String> {
        (**self).caption(image)
    }
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn translate(&self, text: &str) -> Result<String> {
        (**self).translate(text)
    }
}

/// Built once at startup and only read afterwards.
pub struct CaptionPipeline {
    captioner: Box<dyn Captioner>,
    translator: Box<dyn Translator>,
}

impl CaptionPipeline {
    pub fn new(captioner: Box<dyn Captioner>, translator: Box<dyn Translator>) -> Self {
        Self { captioner, translator }
    }

    pub fn offline(caption: impl Into<String>) -> Self {
        Self::new(
            Box::new(StaticCaptioner::new(caption)),
            Box::new(IdentityTranslator),
        )
    }

    pub fn describe(&self, image: &DynamicImage) -> Result<String> {
        let english = self.captioner.caption(image)?;
        log::debug!("Source caption: {}", english);

        let translated = self.translator.translate(&english)?;
        log::info!("Caption: {}", translated);

        Ok(translated)
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub caption_model: String,
    pub translation_model: String,
    pub target_language: String,
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            caption_model: DEFAULT_CAPTION_MODEL.to_string(),
            translation_model: DEFAULT_TRANSLATION_MODEL.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ArtiaError::InvalidParameter(format!(
                "Endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }

        if self.caption_model.trim().is_empty() || self.translation_model.trim().is_empty() {
            return Err(ArtiaError::InvalidParameter(
                "Model names cannot be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ArtiaError::InvalidParameter(
                "Timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

/// Returns the same caption for every image.
pub struct StaticCaptioner {
    caption: String,
}

impl StaticCaptioner {
    pub fn new(caption: impl Into<String>) -> Self {
        Self { caption: caption.into() }
    }
}

impl Captioner for StaticCaptioner {
    fn caption(&self, _image: &DynamicImage) -> Result<String> {
        Ok(self.caption.clone())
    }
}

pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shouting;

    impl Translator for Shouting {
        fn translate(&self, text: &str) -> Result<String> {
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn test_describe_translates_caption() {
        let pipeline = CaptionPipeline::new(
            Box::new(StaticCaptioner::new("a cat on a mat")),
            Box::new(Shouting),
        );
        let image = DynamicImage::new_rgb8(2, 2);
        assert_eq!(pipeline.describe(&image).unwrap(), "A CAT ON A MAT");
    }

    #[test]
    fn test_service_config_validation() {
        assert!(ServiceConfig::default().validate().is_ok());

        let bad_endpoint = ServiceConfig {
            endpoint: "localhost:11434".to_string(),
            ..Default::default()
        };
        assert!(bad_endpoint.validate().is_err());

        let no_timeout = ServiceConfig { timeout_secs: 0, ..Default::default() };
        assert!(no_timeout.validate().is_err());
    }
}

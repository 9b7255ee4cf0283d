// manna-artia/src/caption/ollama.rs
use super::{Captioner, ServiceConfig, Translator};
use crate::core::{ArtiaError, Result};
use crate::processors::Saver;
use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CAPTION_PROMPT: &str =
    "Write one short English sentence describing this image. Reply with the caption only.";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Blocking client for an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaClient {
    client: Client,
    config: ServiceConfig,
}

impl OllamaClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.endpoint.trim_end_matches('/'))
    }

    fn generate(&self, model: &str, prompt: String, images: Vec<String>) -> Result<String> {
        let url = self.generate_url();
        log::debug!("Requesting {} from model {}", url, model);

        let request = GenerateRequest {
            model,
            prompt,
            images,
            stream: false,
        };

        let response = self.client.post(&url).json(&request).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ArtiaError::Caption(format!(
                "Model server returned {}: {}",
                status, body
            )));
        }

        let body: GenerateResponse = response.json()?;
        clean_reply(&body.response)
    }
}

fn clean_reply(reply: &str) -> Result<String> {
    let text = reply.trim().trim_matches('"').trim();
    if text.is_empty() {
        return Err(ArtiaError::Caption("Model returned an empty reply".to_string()));
    }
    Ok(text.to_string())
}

fn translation_prompt(language: &str, text: &str) -> String {
    format!(
        "Translate the following English text to {}. Reply with the translation only.\n\n{}",
        language, text
    )
}

impl Captioner for OllamaClient {
    fn caption(&self, image: &DynamicImage) -> Result<String> {
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let png = Saver::default().encode(&rgb, ImageFormat::Png)?;
        let encoded = general_purpose::STANDARD.encode(&png);

        self.generate(
            &self.config.caption_model,
            CAPTION_PROMPT.to_string(),
            vec![encoded],
        )
    }
}

impl Translator for OllamaClient {
    fn translate(&self, text: &str) -> Result<String> {
        self.generate(
            &self.config.translation_model,
            translation_prompt(&self.config.target_language, text),
            Vec::new(),
        )
    }
}

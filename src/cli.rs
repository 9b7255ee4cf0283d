// manna-artia/src/cli.rs
use crate::caption::{
    ServiceConfig, DEFAULT_CAPTION_MODEL, DEFAULT_ENDPOINT, DEFAULT_TARGET_LANGUAGE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TRANSLATION_MODEL,
};
use crate::core::{ResizeAlgorithm, StyleSelector, DEFAULT_DISPLAY_WIDTH};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artia", version, about = "Caption, assess and stylize images")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Caption an image, suggest edits and save a styled copy
    Process {
        input: PathBuf,

        /// Style: Nenhum, Sépia, Preto e Branco, Posterização, Sketch (or english names)
        #[arg(short, long, default_value = "none")]
        style: StyleSelector,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value_t = DEFAULT_DISPLAY_WIDTH)]
        max_width: u32,

        #[arg(short, long, default_value_t = 90)]
        quality: u8,

        #[arg(long, value_enum, default_value_t = Algorithm::Bicubic)]
        algorithm: Algorithm,

        /// Skip the model server and use a placeholder caption
        #[arg(long)]
        offline: bool,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Print brightness, contrast and edit suggestions
    Assess {
        input: PathBuf,

        #[arg(long, default_value_t = DEFAULT_DISPLAY_WIDTH)]
        max_width: u32,
    },

    /// Auto-correct and apply a style without captioning
    Style {
        input: PathBuf,

        #[arg(short, long)]
        style: StyleSelector,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Apply the style to the image as-is
        #[arg(long)]
        no_correct: bool,

        #[arg(short, long, default_value_t = 90)]
        quality: u8,
    },

    /// Show image dimensions, color type and size
    Info { input: PathBuf },
}

#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_CAPTION_MODEL)]
    pub caption_model: String,

    #[arg(long, default_value = DEFAULT_TRANSLATION_MODEL)]
    pub translation_model: String,

    #[arg(long, default_value = DEFAULT_TARGET_LANGUAGE)]
    pub language: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl From<ServiceArgs> for ServiceConfig {
    fn from(args: ServiceArgs) -> Self {
        ServiceConfig {
            endpoint: args.endpoint,
            caption_model: args.caption_model,
            translation_model: args.translation_model,
            target_language: args.language,
            timeout_secs: args.timeout,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

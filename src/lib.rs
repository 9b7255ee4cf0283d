mod cli;
pub mod caption;
mod core;
mod processors;
mod utils;

pub use caption::{
    CaptionPipeline, Captioner, IdentityTranslator, OllamaClient, ServiceConfig,
    StaticCaptioner, Translator,
};
pub use cli::{Algorithm, Cli, Commands, ServiceArgs};
pub use core::orchestrator::Orchestrator;
pub use core::{
    validate_config, ArtiaError, PipelineConfig, ProcessOutput, QualityReport, ResizeAlgorithm,
    Result, StyleOutcome, StyleSelector, Suggestion, DEFAULT_DISPLAY_WIDTH, NO_IMAGE_CAPTION,
};
pub use processors::advisor::{assess, BRIGHT_THRESHOLD, DARK_THRESHOLD, LOW_CONTRAST_THRESHOLD};
pub use processors::corrector::{auto_correct, BRIGHTNESS_FACTOR, CONTRAST_FACTOR};
pub use processors::resizer::resize_for_display;
pub use processors::stylist::{apply_style, SEPIA_DARK, SEPIA_LIGHT};
pub use processors::{Advisor, Corrector, Loader, LumaStats, Resizer, Saver, Stylist};
pub use utils::{format_file_size, generate_output_path, is_supported_format};

pub mod prelude {
    pub use crate::{
        apply_style, assess, auto_correct, resize_for_display, CaptionPipeline, Orchestrator,
        PipelineConfig, StyleSelector,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;

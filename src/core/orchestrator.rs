// manna-artia/src/core/orchestrator.rs
use super::{
    ArtiaError, PipelineConfig, ProcessOutput, QualityReport, Result, StyleOutcome, StyleSelector,
};
use crate::caption::CaptionPipeline;
use crate::processors::{Advisor, Corrector, Resizer, Stylist};
use image::{DynamicImage, GenericImageView};
use std::sync::Arc;

pub struct Orchestrator {
    config: PipelineConfig,
    pipeline: Arc<CaptionPipeline>,
    resizer: Resizer,
    advisor: Advisor,
    corrector: Corrector,
    stylist: Stylist,
}

impl Orchestrator {
    pub fn new(config: PipelineConfig, pipeline: Arc<CaptionPipeline>) -> Self {
        let resizer = Resizer::new(config.algorithm, config.max_width);

        Self {
            config,
            pipeline,
            resizer,
            advisor: Advisor::new(),
            corrector: Corrector::new(),
            stylist: Stylist::new(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// One request: caption and suggestions from the display copy, styling
    /// from the full-resolution original. A styling failure only drops the image.
    pub fn process(
        &self,
        image: Option<&DynamicImage>,
        style: StyleSelector,
    ) -> Result<ProcessOutput> {
        let Some(original) = image else {
            log::info!("No image submitted");
            return Ok(ProcessOutput::empty());
        };

        let display = self.resizer.resize_for_display(original);

        let caption = self.pipeline.describe(&display)?;
        let quality = self.assess(&display);

        let styled = match self.finish(original, style) {
            StyleOutcome::Styled(image) => Some(image),
            StyleOutcome::Unstyled(err) => {
                log::warn!("Failed to correct/apply style {:?}: {}", style, err);
                None
            }
        };

        Ok(ProcessOutput {
            caption,
            report: quality.to_string(),
            quality: Some(quality),
            styled,
        })
    }

    pub fn assess(&self, image: &DynamicImage) -> QualityReport {
        self.advisor.assess(image)
    }

    /// Auto-correction followed by the chosen style.
    pub fn finish(&self, original: &DynamicImage, style: StyleSelector) -> StyleOutcome {
        match self.correct(original) {
            Ok(corrected) => StyleOutcome::Styled(self.stylist.apply_style(&corrected, style)),
            Err(err) => StyleOutcome::Unstyled(err),
        }
    }

    fn correct(&self, original: &DynamicImage) -> Result<DynamicImage> {
        if let Some((max_w, max_h)) = self.config.max_dimensions {
            let (width, height) = original.dimensions();
            if width > max_w || height > max_h {
                return Err(ArtiaError::MemoryLimitExceeded(format!(
                    "Image dimensions {}x{} exceed maximum {}x{}",
                    width, height, max_w, max_h
                )));
            }
        }

        self.corrector.auto_correct(original)
    }
}

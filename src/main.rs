use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use manna_artia::{
    format_file_size, generate_output_path, Algorithm, CaptionPipeline, Cli, Commands, Corrector,
    Loader, OllamaClient, Orchestrator, PipelineConfig, Saver, ServiceArgs, ServiceConfig,
    StyleSelector, Stylist,
};
use std::path::PathBuf;
use std::sync::Arc;

const OFFLINE_CAPTION: &str = "(legenda indisponível no modo offline)";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match cli.command {
        Commands::Process {
            input,
            style,
            output,
            max_width,
            quality,
            algorithm,
            offline,
            service,
        } => {
            process_request(
                input, style, output, max_width, quality, algorithm, offline, service,
            )?;
        }
        Commands::Assess { input, max_width } => {
            process_assess(input, max_width)?;
        }
        Commands::Style {
            input,
            style,
            output,
            no_correct,
            quality,
        } => {
            process_style(input, style, output, no_correct, quality)?;
        }
        Commands::Info { input } => {
            process_info(input)?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn process_request(
    input: PathBuf,
    style: StyleSelector,
    output: Option<PathBuf>,
    max_width: u32,
    quality: u8,
    algorithm: Algorithm,
    offline: bool,
    service: ServiceArgs,
) -> anyhow::Result<()> {
    let config = PipelineConfig {
        max_width,
        algorithm: algorithm.into(),
        jpeg_quality: quality,
        ..Default::default()
    };
    config.validate()?;

    let pipeline = if offline {
        CaptionPipeline::offline(OFFLINE_CAPTION)
    } else {
        let client = Arc::new(OllamaClient::new(ServiceConfig::from(service))?);
        CaptionPipeline::new(Box::new(client.clone()), Box::new(client))
    };

    let orchestrator = Orchestrator::new(config, Arc::new(pipeline));

    let image = Loader::new()
        .load(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let result = orchestrator.process(Some(&image), style)?;

    println!("Legenda: {}", result.caption);
    println!("Sugestões: {}", result.report);

    match result.styled {
        Some(styled) => {
            let output_path = generate_output_path(&input, output.as_deref(), style.slug());
            Saver::new(quality).save(&styled, &output_path)?;
            println!("Imagem final ({}) salva em: {}", style, output_path.display());
        }
        None => println!("Nenhuma imagem final foi gerada."),
    }

    Ok(())
}

fn process_assess(input: PathBuf, max_width: u32) -> anyhow::Result<()> {
    let image = Loader::new().load(&input)?;
    let display = manna_artia::resize_for_display(&image, max_width);
    let report = manna_artia::assess(&display);

    println!("Brilho: {:.1}", report.brightness);
    println!("Contraste: {:.1}", report.contrast);
    for message in report.messages() {
        println!("- {}", message);
    }

    Ok(())
}

fn process_style(
    input: PathBuf,
    style: StyleSelector,
    output: Option<PathBuf>,
    no_correct: bool,
    quality: u8,
) -> anyhow::Result<()> {
    let image = Loader::new().load(&input)?;

    let base = if no_correct {
        image
    } else {
        Corrector::new().auto_correct(&image)?
    };
    let styled = Stylist::new().apply_style(&base, style);

    let output_path = generate_output_path(&input, output.as_deref(), style.slug());
    Saver::new(quality).save(&styled, &output_path)?;

    println!("Styled image saved to: {}", output_path.display());

    Ok(())
}

fn process_info(input: PathBuf) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("File does not exist: {}", input.display());
    }

    let loader = Loader::new();
    let file_size = std::fs::metadata(&input)?.len();
    let (width, height, format) = loader.get_dimensions_and_format(&input)?;
    let color = loader.load(&input)?.color();

    println!("=== Image Information ===");
    println!("File: {}", input.display());
    println!("Size: {}", format_file_size(file_size));
    println!("Dimensions: {} x {} pixels", width, height);
    println!("Color: {:?}", color);
    println!("Format: {}", format);

    Ok(())
}

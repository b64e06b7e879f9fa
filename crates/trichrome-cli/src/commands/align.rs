use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use trichrome_core::filters::kernel::BorderMode;
use trichrome_core::filters::FilterRegistry;
use trichrome_core::io::save_image;
use trichrome_core::pipeline::config::AlignConfig;
use trichrome_core::pipeline::{AlignmentPipeline, PipelineEvent};
use trichrome_core::resample::ResampleMethod;

use super::{read_stdin_line, stdin_responder};

#[derive(Args)]
pub struct AlignArgs {
    /// Source plate image
    pub input: PathBuf,

    /// Output path for the merged color image
    pub output: PathBuf,

    /// Path of the lifecycle log file
    pub logfile: PathBuf,

    /// Choose and apply a post-processing filter interactively
    #[arg(long)]
    pub filter: bool,

    /// Pre-scale channels for sub-pixel alignment (default scale 2)
    #[arg(long, value_name = "SCALE", num_args = 0..=1, default_missing_value = "2")]
    pub subpixel: Option<f64>,

    /// Use bicubic instead of bilinear interpolation for every rescale
    #[arg(long)]
    pub bicubic_interp: bool,

    /// Mirror-pad kernel filters instead of keeping border pixels
    #[arg(long)]
    pub mirror: bool,

    /// Alignment config file (TOML); command-line flags are ignored when set
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &AlignArgs) -> Result<()> {
    if let Some(scale) = args.subpixel {
        if scale <= 0.0 {
            bail!("subpixel scale must be positive, got {scale}");
        }
    }

    let config: AlignConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid alignment config")?
    } else {
        build_config_from_args(args)
    };

    println!("{}", style("Trichrome Align").bold());
    println!("  Input:    {}", args.input.display());
    println!("  Output:   {}", args.output.display());
    println!("  Interp:   {:?}", config.interpolation);
    match config.subpixel {
        Some(scale) => println!("  Subpixel: x{scale}"),
        None => println!("  Subpixel: disabled"),
    }
    println!();

    let mut pipeline = AlignmentPipeline::new(config.clone());

    let mut log = File::create(&args.logfile)
        .with_context(|| format!("Failed to create log file {}", args.logfile.display()))?;
    pipeline.subscribe(move |event, _| {
        if let Err(e) = writeln!(log, "{event}") {
            warn!(error = %e, "failed to write log entry");
        }
    });

    let output = args.output.clone();
    pipeline.subscribe(move |event, image| {
        if matches!(event, PipelineEvent::Aligned | PipelineEvent::PostProcessed) {
            if let Some(image) = image {
                if let Err(e) = save_image(image, &output) {
                    warn!(error = %e, "failed to save result image");
                }
            }
        }
    });

    let stages = if args.filter || config.postprocess.is_some() {
        5
    } else {
        4
    };
    let progress = ProgressBar::new(stages);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let bar = progress.clone();
    pipeline.subscribe(move |event, _| {
        bar.set_message(event.to_string());
        bar.inc(1);
    });

    let result = pipeline.run_file(&args.input)?;

    if args.filter {
        let registry = FilterRegistry::with_builtins();
        let names = registry.names();
        println!("available filters:");
        for (i, name) in names.iter().enumerate() {
            println!("[{i}] {name}");
        }
        println!("choose filter:");
        let choice: usize = read_stdin_line()?
            .trim()
            .parse()
            .context("filter choice must be a number")?;
        let Some(name) = names.get(choice) else {
            bail!("no filter with number {choice}");
        };
        let mut filter = registry
            .create(name, config.border)
            .expect("listed filters can always be created");
        pipeline.postprocess(&result, filter.as_mut(), stdin_responder)?;
    } else if let Some(ref name) = config.postprocess {
        let registry = FilterRegistry::with_builtins();
        let Some(mut filter) = registry.create(name, config.border) else {
            bail!(
                "unknown filter {name:?}; available: {}",
                registry.names().join(", ")
            );
        };
        pipeline.postprocess(&result, filter.as_mut(), stdin_responder)?;
    }

    progress.finish_with_message("Done");
    println!("\nOutput saved to {}", args.output.display());
    Ok(())
}

fn build_config_from_args(args: &AlignArgs) -> AlignConfig {
    AlignConfig {
        interpolation: if args.bicubic_interp {
            ResampleMethod::Bicubic
        } else {
            ResampleMethod::Bilinear
        },
        subpixel: args.subpixel,
        border: if args.mirror {
            BorderMode::Mirror
        } else {
            BorderMode::Keep
        },
        postprocess: None,
    }
}

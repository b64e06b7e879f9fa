use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use trichrome_core::io::{load_image, save_image};
use trichrome_core::resample::{resize, ResampleMethod};

#[derive(Args)]
pub struct ResizeArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,

    /// Scale factor
    pub scale: f64,

    /// Use bicubic instead of bilinear interpolation
    #[arg(long)]
    pub bicubic: bool,
}

pub fn run(args: &ResizeArgs) -> Result<()> {
    if args.scale <= 0.0 {
        bail!("scale must be positive, got {}", args.scale);
    }

    let method = if args.bicubic {
        ResampleMethod::Bicubic
    } else {
        ResampleMethod::Bilinear
    };

    let image = load_image(&args.input)?;
    let resized = resize(&image, args.scale, method)?;
    save_image(&resized, &args.output)?;

    println!("Output saved to {}", args.output.display());
    Ok(())
}

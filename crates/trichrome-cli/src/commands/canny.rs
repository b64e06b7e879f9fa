use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use trichrome_core::edges::canny;
use trichrome_core::io::{load_image, save_image};

#[derive(Args)]
pub struct CannyArgs {
    /// Input image
    pub input: PathBuf,

    /// Output edge map
    pub output: PathBuf,

    /// Lower gradient threshold (0-360)
    pub threshold1: i32,

    /// Upper gradient threshold (0-360)
    pub threshold2: i32,
}

pub fn run(args: &CannyArgs) -> Result<()> {
    for (name, value) in [("threshold1", args.threshold1), ("threshold2", args.threshold2)] {
        if !(0..=360).contains(&value) {
            bail!("{name} must be in 0-360, got {value}");
        }
    }
    if args.threshold1 >= args.threshold2 {
        bail!("threshold1 must be less than threshold2");
    }

    let image = load_image(&args.input)?;
    let edges = canny(&image, args.threshold1, args.threshold2)?;
    save_image(&edges, &args.output)?;

    println!("Output saved to {}", args.output.display());
    Ok(())
}

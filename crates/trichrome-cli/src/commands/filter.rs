use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use trichrome_core::filters::kernel::BorderMode;
use trichrome_core::filters::FilterRegistry;
use trichrome_core::io::{load_image, save_image};

use super::configure_from_stdin;

#[derive(Args)]
pub struct FilterArgs {
    /// Registered filter name
    pub name: String,

    /// Input image
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,

    /// Mirror-pad kernel filters instead of keeping border pixels
    #[arg(long)]
    pub mirror: bool,
}

pub fn run(args: &FilterArgs) -> Result<()> {
    let border = if args.mirror {
        BorderMode::Mirror
    } else {
        BorderMode::Keep
    };
    let registry = FilterRegistry::with_builtins();
    let Some(mut filter) = registry.create(&args.name, border) else {
        bail!(
            "unknown filter {:?}; available: {}",
            args.name,
            registry.names().join(", ")
        );
    };

    let image = load_image(&args.input)?;
    configure_from_stdin(filter.as_mut())?;
    let result = filter.apply(&image)?;
    save_image(&result, &args.output)?;

    println!("Output saved to {}", args.output.display());
    Ok(())
}

pub mod align;
pub mod canny;
pub mod filter;
pub mod resize;

use std::io::Write;

use anyhow::{Context, Result};
use trichrome_core::error::AlignError;
use trichrome_core::filters::ImageFilter;

/// Drive a filter's configuration prompts from stdin.
pub fn configure_from_stdin(filter: &mut dyn ImageFilter) -> Result<()> {
    while let Some(prompt) = filter.prompt() {
        println!("{prompt}");
        std::io::stdout().flush()?;
        let answer = read_stdin_line()?;
        filter.submit(answer.trim())?;
    }
    Ok(())
}

pub fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line)
}

/// Stdin-backed prompt responder for the pipeline's filter dialogue.
pub fn stdin_responder(prompt: &str) -> std::result::Result<String, AlignError> {
    println!("{prompt}");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}

//! Decode command - recover a hidden message.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use varvault::{decode, decode_bytes};

use super::{read_text, CommandExecutor};

/// Recover the message hidden in a tagged string.
///
/// Text around the tagged string is ignored. Input with nothing hidden
/// prints an empty line.
///
/// Use -o/--output to write the raw bytes to a file (required for binary data).
/// Without -o, the payload must be valid UTF-8.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// The tagged string (reads stdin if neither --input nor --input-file is given)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the tagged string from a file
    #[arg(long, conflicts_with = "input")]
    pub input_file: Option<PathBuf>,

    /// Write the decoded bytes to this file instead of printing text
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let tagged = read_text(self.input.as_deref(), self.input_file.as_deref(), "tagged text")?;

        if let Some(output_path) = &self.output {
            let data = decode_bytes(&tagged);
            std::fs::write(output_path, &data)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            eprintln!("Decoded {} bytes to {}", data.len(), output_path.display());
            return Ok(());
        }

        let message = decode(&tagged)
            .context("Hidden data is not text; use --output to save the raw bytes")?;
        info!("Recovered {} bytes", message.len());
        println!("{}", message);

        Ok(())
    }
}

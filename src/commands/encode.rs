//! Encode command - hide a message or file after a carrier.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use varvault::{encode_bytes_checked, PresetRef};

use super::{carrier_choice, read_text, CommandExecutor};

/// Hide a message behind a carrier character.
///
/// The carrier defaults to the configured `default_carrier` (😀 out of the box).
/// The output looks like the carrier alone; paste it anywhere that keeps
/// text intact.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Carrier text: any emoji, word or character (overrides --preset)
    #[arg(short, long)]
    pub carrier: Option<String>,

    /// Preset carrier as CATEGORY:INDEX (see `varvault carriers`)
    #[arg(long)]
    pub preset: Option<PresetRef>,

    /// Message to hide (reads stdin if neither --message nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Hide the raw bytes of this file instead of a text message
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Do not print a trailing newline
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let choice = carrier_choice(self.carrier.as_deref(), self.preset)?;
        let carrier = choice.resolve();
        debug!(carrier, "resolved carrier");

        let payload = match &self.file {
            Some(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => read_text(self.message.as_deref(), None, "message")?.into_bytes(),
        };

        let tagged = encode_bytes_checked(carrier, &payload)
            .with_context(|| format!("Cannot use {:?} as a carrier", carrier))?;

        info!(
            "Hid {} bytes behind {} visible character(s)",
            payload.len(),
            carrier.chars().count()
        );

        if self.no_newline {
            print!("{}", tagged);
        } else {
            println!("{}", tagged);
        }

        Ok(())
    }
}

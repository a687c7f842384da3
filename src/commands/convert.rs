//! Convert command - one entry point for both directions.

use anyhow::Result;
use clap::Args;

use varvault::{Mode, PresetRef, Vault};

use super::{carrier_choice, load_config, read_text, CommandExecutor};

/// Encode or decode depending on --mode (default from config, else encode).
///
/// On failure prints "Error encoding: Invalid input" or
/// "Error decoding: Invalid input".
#[derive(Args, Debug)]
pub struct ConvertCommand {
    /// Input text (reads stdin if omitted)
    pub input: Option<String>,

    /// encode or decode
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Carrier text for encoding (overrides --preset)
    #[arg(short, long)]
    pub carrier: Option<String>,

    /// Preset carrier as CATEGORY:INDEX
    #[arg(long)]
    pub preset: Option<PresetRef>,
}

impl CommandExecutor for ConvertCommand {
    fn execute(&self) -> Result<()> {
        let mode = self.mode.unwrap_or_else(|| load_config().default_mode);
        let vault = Vault::new(mode, carrier_choice(self.carrier.as_deref(), self.preset)?);

        let input = read_text(self.input.as_deref(), None, "input")?;
        let output = vault.convert(&input)?;
        println!("{}", output);

        Ok(())
    }
}

//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod carriers;
mod config;
mod convert;
mod decode;
mod encode;
mod inspect;

pub use carriers::CarriersCommand;
pub use config::ConfigCommand;
pub use convert::ConvertCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use varvault::{CarrierChoice, Config, PresetRef};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Loads the user config, falling back to defaults when it can't be read.
pub(crate) fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            Config::default()
        }
    }
}

/// Builds the carrier selection from `--carrier`, `--preset` and the config default.
pub(crate) fn carrier_choice(custom: Option<&str>, preset: Option<PresetRef>) -> Result<CarrierChoice> {
    let preset = match preset {
        Some(p) => p.resolve()?.to_string(),
        None => load_config().default_carrier,
    };

    Ok(CarrierChoice {
        custom: custom.map(str::to_string),
        preset: Some(preset),
    })
}

/// Reads text from an argument, a file, or stdin, in that order.
///
/// Only the trailing line break is dropped from file and stdin input; other
/// whitespace may be part of a tagged string.
pub(crate) fn read_text(arg: Option<&str>, file: Option<&Path>, what: &str) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text.to_string());
    }

    let raw = if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display()))?
    } else {
        if io::stdin().is_terminal() {
            eprintln!("Reading {} from stdin (Ctrl+D to finish):", what);
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .with_context(|| format!("Failed to read {} from stdin", what))?;
        buffer
    };

    Ok(strip_line_break(&raw).to_string())
}

fn strip_line_break(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

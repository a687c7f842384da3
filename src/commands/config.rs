//! Config command - view and edit `~/.varvault/config.toml`.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use varvault::{Config, Mode};

use super::CommandExecutor;

/// Show or change the saved defaults.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration and its location
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set the carrier used when --carrier and --preset are omitted
    SetCarrier {
        carrier: String,
    },

    /// Set the direction used by `convert` when --mode is omitted
    SetMode {
        mode: Mode,
    },
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        let path = Config::config_path()?;

        match &self.action {
            ConfigAction::Show => {
                let config = Config::load()
                    .with_context(|| format!("Failed to load {}", path.display()))?;
                println!("# {}", path.display());
                print!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if path.exists() && !force {
                    bail!("{} already exists (use --force to overwrite)", path.display());
                }
                Config::default().save()?;
                println!("Wrote {}", path.display());
            }
            ConfigAction::SetCarrier { carrier } => {
                let mut config = Config::load()?;
                config.default_carrier = carrier.clone();
                config.save()?;
                println!("Default carrier set to {}", carrier);
            }
            ConfigAction::SetMode { mode } => {
                let mut config = Config::load()?;
                config.default_mode = *mode;
                config.save()?;
                println!("Default mode set to {}", mode);
            }
        }

        Ok(())
    }
}

//! varvault - hide text in plain sight
//!
//! A CLI tool for Unicode variation-selector steganography.
//! Messages ride invisibly behind an emoji or any other character.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CarriersCommand, CommandExecutor, ConfigCommand, ConvertCommand, DecodeCommand,
    EncodeCommand, InspectCommand,
};

/// varvault - hide text in plain sight
///
/// Encode hidden messages into emojis or characters using Unicode variation
/// selectors. Share them anywhere and only those who know can decode them.
#[derive(Parser)]
#[command(name = "varvault")]
#[command(version)]
#[command(about = "Hide secret messages in plain sight using Unicode variation selectors")]
#[command(long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message behind a carrier character
    Encode(EncodeCommand),

    /// Recover a hidden message
    Decode(DecodeCommand),

    /// Encode or decode depending on --mode
    Convert(ConvertCommand),

    /// Show the visible text and hidden payload of a string
    Inspect(InspectCommand),

    /// List preset carriers
    Carriers(CarriersCommand),

    /// Show or change saved defaults
    Config(ConfigCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Encode(cmd) => cmd,
            Commands::Decode(cmd) => cmd,
            Commands::Convert(cmd) => cmd,
            Commands::Inspect(cmd) => cmd,
            Commands::Carriers(cmd) => cmd,
            Commands::Config(cmd) => cmd,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.command.executor().execute()
}

/// Logs go to stderr so stdout stays clean for tagged output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

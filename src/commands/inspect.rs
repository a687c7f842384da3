//! Inspect command - show what a string carries without printing it as output.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use varvault::inspect::{inspect, selector_table};

use super::{read_text, CommandExecutor};

/// Report the visible text and hidden payload of a string.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Text to inspect (reads stdin if neither --input nor --input-file is given)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "input")]
    pub input_file: Option<PathBuf>,

    /// List every selector with the byte it carries
    #[arg(short, long)]
    pub table: bool,
}

impl CommandExecutor for InspectCommand {
    fn execute(&self) -> Result<()> {
        let input = read_text(self.input.as_deref(), self.input_file.as_deref(), "text")?;
        let report = inspect(&input);

        println!("Payload Analysis");
        println!("================");
        println!("  Visible text: {:?}", report.visible);
        println!("  Visible characters: {}", report.visible_chars);
        println!(
            "  Hidden bytes: {} ({} low-range, {} high-range selectors)",
            report.payload_len(),
            report.low_selectors,
            report.high_selectors
        );

        if !report.has_payload() {
            println!("  Status: nothing hidden");
        } else {
            match &report.text {
                Ok(text) => println!("  Status: UTF-8 text ({} characters)", text.chars().count()),
                Err(e) => println!("  Status: binary data ({})", e),
            }
        }

        if self.table {
            println!();
            for (i, (selector, byte)) in selector_table(&input).into_iter().enumerate() {
                println!("  {:>5}  U+{:05X} -> 0x{:02X}", i, u32::from(selector), byte);
            }
        }

        Ok(())
    }
}

//! Carriers command - list the preset carriers.

use anyhow::Result;
use clap::Args;

use varvault::carriers::{search, Category};

use super::CommandExecutor;

/// List preset carriers and their CATEGORY:INDEX references.
#[derive(Args, Debug)]
pub struct CarriersCommand {
    /// Only list this category: emoji, alphabet, number or special
    pub category: Option<Category>,

    /// Only list carriers containing this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,
}

impl CommandExecutor for CarriersCommand {
    fn execute(&self) -> Result<()> {
        let categories = match self.category {
            Some(c) => vec![c],
            None => Category::ALL.to_vec(),
        };

        for category in categories {
            let matches = search(category, &self.search);
            if matches.is_empty() {
                continue;
            }

            println!("{} ({})", category.title(), category);
            for (index, carrier) in matches {
                println!("  {}:{:<3} {}", category, index, carrier);
            }
            println!();
        }

        Ok(())
    }
}

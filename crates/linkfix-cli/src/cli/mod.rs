//! CLI for the linkfix documentation-link corrector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkfix_core::config;
use linkfix_core::pages::PageTable;

use commands::{run_check, run_resolve, run_table};

/// Top-level CLI for the linkfix link corrector.
#[derive(Debug, Parser)]
#[command(name = "linkfix")]
#[command(about = "linkfix: rewrite relative docs links to their repository URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the corrected URL for a single href.
    Resolve {
        /// Href as captured from an anchor, e.g. "./install.md".
        href: String,
    },

    /// Read hrefs (one per line) and print corrections for the relative ones.
    Check {
        /// File of hrefs; reads stdin when omitted.
        path: Option<String>,
    },

    /// Print the effective slug table (built-in entries plus config overlay).
    Table,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let table = PageTable::from_config(&cfg);

        match cli.command {
            CliCommand::Resolve { href } => run_resolve(&table, &cfg.base_url, &href),
            CliCommand::Check { path } => run_check(&table, &cfg.base_url, path.as_deref())?,
            CliCommand::Table => run_table(&table, &cfg.base_url),
        }

        Ok(())
    }
}

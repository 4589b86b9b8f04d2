//! # update-yaml-nodes
//!
//! Resizes the `containers:` list of a Caliper monitor configuration to
//! `/node-besu1` through `/node-besuN`, editing the file in place.

mod commands;
mod output;

use clap::Parser;
use clap::error::ErrorKind;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "rejected command line");
            print!("{}", e.render());
            std::process::exit(1);
        }
    };
    commands::execute(cli)
}

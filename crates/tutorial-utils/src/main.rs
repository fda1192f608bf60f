use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{App, Commands};

mod cli;

fn main() -> anyhow::Result<()> {
    let app = App::parse();
    init_tracing(app.verbose);

    match app.cmd {
        Commands::RsoxsSimulationData(arg) => {
            let entries = tutorial_utils::rsoxs_simulation_data(&arg.into())
                .context("failed to fetch the RSoXS simulation dataset")?;
            if entries.is_empty() {
                println!("destination already exists, nothing to do");
            }
            for entry in &entries {
                println!("{}", entry.name);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! CLI entry point for weighted image sheet generation

use clap::Parser;
use sheetmix::io::cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> sheetmix::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --quiet keeps only warnings
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.quiet {
            "sheetmix=warn"
        } else {
            "sheetmix=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    run(cli)
}

//! CLI entrypoint for `quickctor`.

use clap::Parser;
use quickctor_cli::cli::Args;
use quickctor_cli::error::QuickctorError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<(), QuickctorError> {
    init_tracing();
    let args = Args::parse();
    quickctor_cli::run(&args, &mut std::io::stderr().lock())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

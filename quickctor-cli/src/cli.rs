//! Command-line interface definitions for `quickctor`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `quickctor`.
#[derive(Debug, Clone, Parser)]
#[command(name = "quickctor")]
#[command(about = "Synthesize constructors for marked type descriptors")]
#[command(version)]
pub struct Args {
    /// Descriptor manifest (JSON) listing candidate types.
    #[arg(long, value_name = "path")]
    pub input: Utf8PathBuf,
    /// Output directory for generated sources.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Settings file; defaults to `quickctor.toml` when present.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// File extension for generated sources.
    #[arg(long, value_name = "ext")]
    pub extension: Option<String>,
    /// Report diagnostics without writing any files.
    #[arg(long = "check")]
    pub should_check: bool,
    /// Write diagnostics as JSON to this file.
    #[arg(long, value_name = "path")]
    pub report: Option<Utf8PathBuf>,
}

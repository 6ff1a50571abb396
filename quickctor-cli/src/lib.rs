//! Library interface for the `quickctor` tool.
//!
//! The tool stands in for a compiler host: it reads a manifest of type
//! descriptors, synthesizes a constructor for every marked type, writes the
//! generated sources and reports diagnostics in compiler style.

pub mod cli;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod settings;

use std::io::Write;

use tracing::info;

use crate::cli::Args;
use crate::error::QuickctorError;
use crate::settings::CliOverrides;

/// Runs the full pipeline for `args`, writing diagnostics to `diagnostics`.
///
/// # Errors
///
/// Returns an error when settings or the manifest cannot be loaded, when
/// output cannot be written, or [`QuickctorError::SynthesisFailed`] when any
/// candidate failed.
pub fn run<W: Write>(args: &Args, diagnostics: &mut W) -> Result<(), QuickctorError> {
    let settings = settings::load_settings(&CliOverrides {
        config: args.config.clone(),
        out_dir: args.out_dir.clone(),
        extension: args.extension.clone(),
    })?;
    let manifest = manifest::load_manifest(&args.input)?;
    let outcome = generate::generate(&manifest, &settings);

    for entry in &outcome.diagnostics {
        writeln!(diagnostics, "{}", entry.to_line()).map_err(|io_err| QuickctorError::Io {
            path: "<stderr>".into(),
            source: io_err,
        })?;
    }
    if let Some(report) = &args.report {
        output::write_report(report, &outcome.diagnostics)?;
    }

    if args.should_check {
        info!(files = outcome.files.len(), "check mode: no files written");
    } else {
        for file in &outcome.files {
            let path = output::write_source(&settings.out_dir, file)?;
            info!(type_name = %file.type_name, %path, "wrote generated source");
        }
    }

    match outcome.failed {
        0 => Ok(()),
        count => Err(QuickctorError::SynthesisFailed { count }),
    }
}

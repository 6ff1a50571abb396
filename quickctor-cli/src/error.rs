//! Error types for the `quickctor` tool.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `quickctor` pipeline.
#[derive(Debug, Error)]
pub enum QuickctorError {
    /// A file or directory could not be accessed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid descriptor JSON.
    #[error("failed to parse manifest {path}: {source}")]
    ManifestJson {
        /// Manifest path.
        path: Utf8PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The manifest declares a schema version this build does not read.
    #[error("manifest {path} has schema version '{found}'; expected '{expected}'")]
    SchemaVersion {
        /// Manifest path.
        path: Utf8PathBuf,
        /// Version declared by the manifest.
        found: String,
        /// Version understood by this build.
        expected: &'static str,
    },

    /// An explicitly requested settings file does not exist.
    #[error("settings file {0} not found")]
    MissingSettings(Utf8PathBuf),

    /// Layered settings could not be extracted.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// A setting holds a value outside its allowed range.
    #[error("invalid setting '{key}': {message}")]
    InvalidSetting {
        /// Setting name.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The diagnostic report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    /// One or more types could not be synthesized.
    #[error("{count} type(s) failed synthesis")]
    SynthesisFailed {
        /// Number of failed types.
        count: usize,
    },
}

//! Shared helpers for `quickctor` integration tests.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use quickctor::TypeDescriptor;
use std::process::{Command, Output};
use test_helpers::manifest::manifest_json;

/// Resolves the compiled `quickctor` binary path from test environment
/// variables.
///
/// # Errors
///
/// Returns an error when none of the supported cargo/nextest binary
/// environment variables are present.
pub(crate) fn quickctor_exe() -> Result<Utf8PathBuf> {
    let env_vars = ["CARGO_BIN_EXE_quickctor", "NEXTEST_BIN_EXE_quickctor"];
    for var in env_vars {
        if let Ok(path) = std::env::var(var) {
            return Ok(Utf8PathBuf::from(path));
        }
    }
    Err(anyhow!("quickctor binary path not found in environment"))
}

/// A temporary working directory holding a manifest.
pub(crate) struct Workspace {
    _temp: tempfile::TempDir,
    pub(crate) root: Utf8PathBuf,
}

impl Workspace {
    /// Creates a workspace with `types.json` describing `types`.
    pub(crate) fn with_manifest(types: &[TypeDescriptor]) -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| anyhow!("non-UTF-8 tempdir {}", path.display()))?;
        let workspace = Self { _temp: temp, root };
        workspace.write("types.json", &manifest_json(types)?)?;
        Ok(workspace)
    }

    /// Writes `contents` to `name` inside the workspace.
    pub(crate) fn write(&self, name: &str, contents: &str) -> Result<()> {
        std::fs::write(self.root.join(name), contents).with_context(|| format!("write {name}"))
    }

    /// Reads `name` relative to the workspace root.
    pub(crate) fn read(&self, name: impl AsRef<Utf8Path>) -> Result<String> {
        let path = self.root.join(name);
        std::fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }

    /// Runs `quickctor --input types.json` plus `args` in the workspace.
    pub(crate) fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new(quickctor_exe()?)
            .current_dir(&self.root)
            .env_remove("RUST_LOG")
            .args(["--input", "types.json"])
            .args(args)
            .output()
            .context("run quickctor")
    }
}

/// Returns the captured stderr as text.
pub(crate) fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

//! Output writers for `quickctor`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::QuickctorError;
use crate::generate::{GeneratedFile, ReportEntry};

/// Writes one generated source file under `out_dir`.
///
/// # Errors
///
/// Returns [`QuickctorError::Io`] when the directory or file cannot be
/// written.
pub fn write_source(
    out_dir: &Utf8Path,
    file: &GeneratedFile,
) -> Result<Utf8PathBuf, QuickctorError> {
    let dir = ensure_dir(out_dir)?;
    write_file(&dir, out_dir, &file.file_name, file.source.as_bytes())
}

/// Writes the diagnostic report as pretty JSON.
///
/// # Errors
///
/// Returns [`QuickctorError::Report`] when serialization fails and
/// [`QuickctorError::Io`] when the file cannot be written.
pub fn write_report(
    path: &Utf8Path,
    entries: &[ReportEntry],
) -> Result<Utf8PathBuf, QuickctorError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| QuickctorError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "report path has no file name",
        ),
    })?;
    let dir = ensure_dir(parent)?;
    let mut content = serde_json::to_string_pretty(entries)?;
    content.push('\n');
    write_file(&dir, parent, file_name, content.as_bytes())
}

fn write_file(
    dir: &Dir,
    dir_path: &Utf8Path,
    file_name: &str,
    content: &[u8],
) -> Result<Utf8PathBuf, QuickctorError> {
    let file_path = dir_path.join(file_name);
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| QuickctorError::Io {
            path: file_path.clone(),
            source: io_err,
        })?;
    file.write_all(content).map_err(|io_err| QuickctorError::Io {
        path: file_path.clone(),
        source: io_err,
    })?;
    Ok(file_path)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, QuickctorError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                QuickctorError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| QuickctorError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(QuickctorError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}

//! Descriptor manifests: the JSON documents a host hands to the tool.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use quickctor::{DESCRIPTOR_SCHEMA_VERSION, TypeDescriptor};
use serde::{Deserialize, Serialize};

use crate::error::QuickctorError;

/// Candidate declarations collected by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Descriptor schema version.
    pub version: String,
    /// Type descriptors in host order.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl Manifest {
    /// Types carrying the marker, in manifest order.
    pub fn candidates(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().filter(|ty| ty.is_marked())
    }
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`QuickctorError::Io`] when the file cannot be read,
/// [`QuickctorError::ManifestJson`] when it is not a valid manifest and
/// [`QuickctorError::SchemaVersion`] when its version is not supported.
pub fn load_manifest(path: &Utf8Path) -> Result<Manifest, QuickctorError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| QuickctorError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "manifest path has no file name",
        ),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|io_err| {
        QuickctorError::Io {
            path: parent.to_path_buf(),
            source: io_err,
        }
    })?;
    let contents = dir
        .read_to_string(file_name)
        .map_err(|io_err| QuickctorError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;
    parse_manifest(path, &contents)
}

/// Parses manifest JSON, checking its schema version.
///
/// # Errors
///
/// Returns [`QuickctorError::ManifestJson`] or
/// [`QuickctorError::SchemaVersion`].
pub fn parse_manifest(path: &Utf8Path, contents: &str) -> Result<Manifest, QuickctorError> {
    let manifest: Manifest =
        serde_json::from_str(contents).map_err(|source| QuickctorError::ManifestJson {
            path: path.to_path_buf(),
            source,
        })?;
    if manifest.version != DESCRIPTOR_SCHEMA_VERSION {
        return Err(QuickctorError::SchemaVersion {
            path: path.to_path_buf(),
            found: manifest.version,
            expected: DESCRIPTOR_SCHEMA_VERSION,
        });
    }
    Ok(manifest)
}

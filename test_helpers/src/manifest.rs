//! Manifest documents consumed by the `quickctor` tool.

use quickctor::{DESCRIPTOR_SCHEMA_VERSION, TypeDescriptor};

/// Serializes `types` as a manifest carrying the current schema version.
///
/// # Errors
///
/// Returns an error when a descriptor cannot be serialized.
pub fn manifest_json(types: &[TypeDescriptor]) -> serde_json::Result<String> {
    versioned_manifest_json(DESCRIPTOR_SCHEMA_VERSION, types)
}

/// Serializes `types` as a manifest declaring `version`.
///
/// # Errors
///
/// Returns an error when a descriptor cannot be serialized.
pub fn versioned_manifest_json(
    version: &str,
    types: &[TypeDescriptor],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "version": version,
        "types": types,
    }))
}

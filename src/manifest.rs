//! Reading and rewriting the `version` field of JSON manifests.
//!
//! Manifests are re-serialized with two-space indentation and their original key
//! order, with no trailing newline.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{FrontkitError, Result};

/// Reads the `version` string of a manifest, `None` when the field is absent or not a string.
pub fn read_version(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&content)?;
    Ok(json
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string))
}

/// Sets the `version` field of a manifest, adding it when missing.
pub fn write_version(path: &Path, version: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let mut json: Value = serde_json::from_str(&content)?;

    let Some(object) = json.as_object_mut() else {
        return Err(FrontkitError::version(format!(
            "Manifest '{}' is not a JSON object",
            path.display()
        )));
    };
    object.insert("version".to_string(), Value::String(version.to_string()));

    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    tracing::debug!(path = %path.display(), version, "manifest version updated");
    Ok(())
}

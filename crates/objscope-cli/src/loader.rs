//! Loading JSON documents into browsable graphs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use objscope_types::{ObjRef, from_json};

pub fn load_json_file(file: &Path) -> Result<ObjRef> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))?;
    Ok(from_json(&value))
}

//! Parser module — dispatch by file extension.

pub mod php;

use crate::model::SourceUnit;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Tokenize a source file into doc-comment units based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<Vec<SourceUnit>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("php") => Ok(php::parse(content, &path.to_string_lossy())),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}

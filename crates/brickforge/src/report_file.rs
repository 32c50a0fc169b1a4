//! # Report Writing
//!
//! Serializes the assembled report to pretty JSON. The layout comes
//! entirely from the engine's assembler; this module only handles the
//! filesystem.

use std::fs;
use std::path::Path;

use brickforge_engine::BuildReport;

use crate::error::BuilderError;

/// Writes the report as pretty JSON, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns [`BuilderError`] on serialization or filesystem failure.
pub fn write_report(report: &BuildReport, path: &Path) -> Result<(), BuilderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

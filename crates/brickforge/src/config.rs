//! # Run Configuration
//!
//! One TOML file describes an analysis run: where the inventory and
//! snapshots live and where the report goes.
//!
//! ```toml
//! inventory = "bricklink-inventory/store.xml"
//! catalog = "snapshots/minifigures.json"
//! prices = "snapshots/minifig_prices.json"
//! report = "reports/buildable-minifigs.json"
//! complete_only = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BuilderError;

/// Default report location, relative to the working directory.
fn default_report_path() -> PathBuf {
    PathBuf::from("reports/buildable-minifigs.json")
}

/// Configuration for one analysis run.
#[derive(Clone, Debug, Deserialize)]
pub struct BuilderConfig {
    /// BrickLink store inventory XML.
    pub inventory: PathBuf,
    /// Pre-fetched minifigure catalog snapshot (JSON).
    pub catalog: PathBuf,
    /// Pre-fetched price book (JSON). Optional: without it every profit
    /// degrades to zero.
    #[serde(default)]
    pub prices: Option<PathBuf>,
    /// Where to write the JSON report.
    #[serde(default = "default_report_path")]
    pub report: PathBuf,
    /// Print only complete builds to the console. The report file always
    /// carries both groups.
    #[serde(default)]
    pub complete_only: bool,
}

impl BuilderConfig {
    /// Loads a run configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError`] when the file cannot be read or parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self, BuilderError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

//! # Boundary Error Types
//!
//! Failures while reading configuration, inventories, and snapshots.
//! These abort a run with a message; the engine itself never raises.

use brickforge_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur in the boundary layer.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The inventory XML could not be deserialized.
    #[error("inventory XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A JSON snapshot could not be deserialized.
    #[error("snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    /// The run configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Catalog data failed validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

//! # Catalog and Price Snapshots
//!
//! The engine consumes fully-materialized, already-normalized data.
//! External tooling fetches minifigure inventories and price guides and
//! caches them as JSON; this module only reads those files.
//!
//! Catalog snapshot:
//!
//! ```json
//! {
//!   "minifigs": [
//!     {
//!       "minifig_id": "sw0001",
//!       "name": "Luke Skywalker",
//!       "year_released": 1999,
//!       "category_name": "Star Wars",
//!       "parts": [
//!         {
//!           "part_id": "3626b", "color_id": 14,
//!           "part_name": "Minifig Head", "color_name": "Yellow",
//!           "quantity": 1,
//!           "is_alternate": false, "is_counterpart": false,
//!           "is_extra": false, "is_spare": false
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Price book: a map from minifig id to its six-month guide,
//! `{"sw0001": {"ordered_used": {"avg_price": 12.5}}}`.

use std::fs;
use std::path::Path;

use brickforge_catalog::{MinifigRecipe, PriceBook};
use serde::Deserialize;

use crate::error::BuilderError;

/// Root of the catalog snapshot file.
#[derive(Debug, Deserialize)]
struct CatalogSnapshot {
    /// All known minifigure recipes.
    #[serde(default)]
    minifigs: Vec<MinifigRecipe>,
}

/// Loads the minifigure recipes from a catalog snapshot file.
///
/// # Errors
///
/// Returns [`BuilderError`] when the file cannot be read or parsed.
pub fn load_recipes(path: &Path) -> Result<Vec<MinifigRecipe>, BuilderError> {
    let text = fs::read_to_string(path)?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&text)?;
    Ok(snapshot.minifigs)
}

/// Loads the price book from a price snapshot file.
///
/// # Errors
///
/// Returns [`BuilderError`] when the file cannot be read or parsed.
pub fn load_price_book(path: &Path) -> Result<PriceBook, BuilderError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

//! # Catalog Error Types
//!
//! Errors raised while constructing catalog data. Matching and allocation
//! never raise: data sparsity downstream degrades to zero/absent values.

use thiserror::Error;

/// Errors that can occur while building catalog data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A price literal could not be parsed as a non-negative decimal.
    #[error("invalid price literal: {value:?}")]
    InvalidPrice {
        /// The offending literal.
        value: String,
    },

    /// A recipe failed structural validation.
    #[error("invalid recipe {minifig_id}: {reason}")]
    InvalidRecipe {
        /// The minifigure the recipe belongs to.
        minifig_id: String,
        /// What was wrong with it.
        reason: String,
    },
}

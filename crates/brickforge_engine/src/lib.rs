//! # BRICKFORGE Engine
//!
//! The allocation and scoring core: decides which minifigures an inventory
//! can build and partitions scarce parts across competing candidates to
//! maximize value.
//!
//! ## Design Principles
//!
//! 1. **Deterministic greedy allocation** - two ordered phases, stable
//!    sorts, no backtracking, no global optimization
//! 2. **Read-only snapshot** - the inventory is never mutated; committed
//!    stock lives in a pass-local ledger
//! 3. **Total functions** - data sparsity degrades to zero/absent values;
//!    nothing in this crate returns an error
//!
//! ## Pipeline
//!
//! ```text
//! PartInventory + recipes + prices
//!     -> matcher::evaluate_candidates   (per-recipe match + score)
//!     -> allocator::allocate            (global, stateful pass)
//!     -> report::assemble_report        (stable export layout)
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod allocator;
pub mod candidate;
pub mod matcher;
pub mod report;
pub mod scorer;

pub use allocator::{allocate, AllocationLedger};
pub use candidate::{BuildCandidate, MatchedPart, MissingPart};
pub use matcher::{evaluate_candidates, match_recipe};
pub use report::{assemble_report, BuildRecord, BuildReport, PriceAverages, ReportSummary};

use brickforge_catalog::{MinifigRecipe, PartInventory, PriceBook};

/// Runs the whole pipeline: match, score, allocate, assemble.
///
/// Empty inventories or candidate lists yield an empty report, not an
/// error.
#[must_use]
pub fn analyze(
    inventory: &PartInventory,
    recipes: &[MinifigRecipe],
    prices: &PriceBook,
) -> BuildReport {
    let candidates = evaluate_candidates(inventory, recipes, prices);
    let builds = allocate(inventory, &candidates);
    assemble_report(&builds)
}

//! # Build Candidates
//!
//! A candidate is one minifigure recipe plus its live match state against
//! the inventory: which required parts are covered, which are short, and
//! the derived counts the allocator sorts on.

use brickforge_catalog::{Margin, Money, PartRef, PriceGuide};
use serde::Serialize;

/// A matched recipe line: the inventory covers the full requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchedPart {
    /// The part slot.
    #[serde(flatten)]
    pub part: PartRef,
    /// Catalog display name of the part.
    pub part_name: String,
    /// Display name of the color.
    pub color_name: String,
    /// Units required per built copy.
    pub quantity: u32,
    /// Inventory unit price.
    pub price: Money,
    /// `price * quantity` for this line.
    pub total_price: Money,
    /// Remark carried by the inventory stock.
    pub remarks: String,
}

/// A short recipe line: the inventory covers less than the requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissingPart {
    /// The part slot.
    #[serde(flatten)]
    pub part: PartRef,
    /// Catalog display name of the part.
    pub part_name: String,
    /// Display name of the color.
    pub color_name: String,
    /// Units required per built copy.
    pub needed: u32,
    /// Units actually available.
    pub available: u32,
    /// `needed - available`.
    pub short_by: u32,
    /// Inventory unit price for the units that do exist.
    pub price: Money,
    /// Remark - empty when nothing is available at all.
    pub remarks: String,
}

/// One minifigure recipe with its match result.
///
/// Produced by the matcher against the raw inventory; the allocator emits
/// updated copies of these as accepted builds. `buildable_count` starts as
/// the theoretical copy maximum and becomes the committed copy count once
/// a complete build is accepted.
#[derive(Clone, Debug)]
pub struct BuildCandidate {
    /// BrickLink minifigure id.
    pub minifig_id: String,
    /// Display name.
    pub minifig_name: String,
    /// Release year, when known. Sorts as 0 when absent; display is
    /// never altered.
    pub year_released: Option<u16>,
    /// Catalog category name.
    pub category_name: String,
    /// Count of regular required parts.
    pub total_parts: u32,
    /// How many of them the inventory covers.
    pub matched_parts: u32,
    /// How many it does not.
    pub missing_parts: u32,
    /// `matched / total * 100`.
    pub match_percentage: f64,
    /// True iff every regular part is covered.
    pub can_build: bool,
    /// Maximum simultaneous complete copies (0 when not buildable).
    pub buildable_count: u32,
    /// Detail for covered lines.
    pub matched_details: Vec<MatchedPart>,
    /// Detail for short lines.
    pub missing_details: Vec<MissingPart>,
    /// Market price guide, when the price book has one.
    pub price_guide: Option<PriceGuide>,
    /// Profit sort key - zero for partial candidates and for complete
    /// ones without price data.
    pub profit: Margin,
}

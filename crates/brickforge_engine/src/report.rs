//! # Result Assembler
//!
//! Packages accepted builds into the display/export layout. Pure
//! transformation - no allocation logic, no I/O. The field layout is
//! stable and serializes directly to a JSON document.

use brickforge_catalog::{Money, PriceGuide};
use serde::Serialize;

use crate::candidate::{BuildCandidate, MatchedPart, MissingPart};

/// Headline counts for one analysis run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Builds emitted by the allocator (complete + incomplete).
    pub total_checked: usize,
    /// Complete builds.
    pub complete_matches: usize,
    /// Incomplete (partial) builds.
    pub incomplete_matches: usize,
}

/// Six-month average prices, by condition. Only known conditions appear.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceAverages {
    /// New-condition average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_condition: Option<Money>,
    /// Used-condition average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_condition: Option<Money>,
}

impl PriceAverages {
    /// Extracts the displayable averages from a price guide, or `None`
    /// when the guide carries no usable average at all.
    #[must_use]
    fn from_guide(guide: Option<&PriceGuide>) -> Option<Self> {
        let guide = guide?;
        let new_condition = guide.new_condition();
        let used_condition = guide.used_condition();
        if new_condition.is_none() && used_condition.is_none() {
            return None;
        }
        Some(Self {
            new_condition,
            used_condition,
        })
    }
}

/// One build in the report, in the stable export layout.
#[derive(Clone, Debug, Serialize)]
pub struct BuildRecord {
    /// BrickLink minifigure id.
    pub minifig_id: String,
    /// Display name.
    pub minifig_name: String,
    /// Release year, when known.
    pub year_released: Option<u16>,
    /// Catalog category name.
    pub category_name: String,
    /// Count of regular required parts.
    pub total_parts: u32,
    /// Complete copies allocated (0 for partial builds).
    pub buildable_count: u32,
    /// Covered part lines.
    pub matched_parts: u32,
    /// Short part lines.
    pub missing_parts: u32,
    /// `matched / total * 100`.
    pub match_percentage: f64,
    /// True for complete builds.
    pub can_build: bool,
    /// Profit, rounded to two decimals.
    pub profit: f64,
    /// Six-month price averages, when any exist.
    pub prices_6month_average: Option<PriceAverages>,
    /// Matched part detail.
    pub all_parts: Vec<MatchedPart>,
    /// Missing part detail.
    pub missing_details: Vec<MissingPart>,
}

impl From<&BuildCandidate> for BuildRecord {
    fn from(build: &BuildCandidate) -> Self {
        Self {
            minifig_id: build.minifig_id.clone(),
            minifig_name: build.minifig_name.clone(),
            year_released: build.year_released,
            category_name: build.category_name.clone(),
            total_parts: build.total_parts,
            buildable_count: build.buildable_count,
            matched_parts: build.matched_parts,
            missing_parts: build.missing_parts,
            match_percentage: build.match_percentage,
            can_build: build.can_build,
            profit: build.profit.to_f64_cents(),
            prices_6month_average: PriceAverages::from_guide(build.price_guide.as_ref()),
            all_parts: build.matched_details.clone(),
            missing_details: build.missing_details.clone(),
        }
    }
}

/// The full analysis report.
#[derive(Clone, Debug, Serialize)]
pub struct BuildReport {
    /// Headline counts.
    pub summary: ReportSummary,
    /// Complete builds, allocation order.
    pub complete: Vec<BuildRecord>,
    /// Partial builds, allocation order.
    pub incomplete: Vec<BuildRecord>,
}

/// Assembles the report from the allocator's accepted builds.
#[must_use]
pub fn assemble_report(builds: &[BuildCandidate]) -> BuildReport {
    let complete: Vec<BuildRecord> = builds
        .iter()
        .filter(|b| b.can_build)
        .map(BuildRecord::from)
        .collect();
    let incomplete: Vec<BuildRecord> = builds
        .iter()
        .filter(|b| !b.can_build)
        .map(BuildRecord::from)
        .collect();

    BuildReport {
        summary: ReportSummary {
            total_checked: builds.len(),
            complete_matches: complete.len(),
            incomplete_matches: incomplete.len(),
        },
        complete,
        incomplete,
    }
}

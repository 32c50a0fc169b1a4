//! # Allocator
//!
//! The central state machine: partitions scarce parts across competing
//! candidates so no unit is double-counted. Two ordered phases, one
//! forward pass each, no backtracking:
//!
//! 1. **Complete builds** - candidates whose every regular part is
//!    covered, ranked by profit (all sit at 100% match). Accepting a
//!    build commits `needed * copies` units per part to the ledger, so a
//!    later candidate sees only what remains.
//! 2. **Partial builds** - every candidate with at least one matched
//!    part, ranked by parts cost. Parts consumed in phase 1 surface as
//!    missing with a reserved-stock remark. Phase 2 is informational and
//!    never writes the ledger.
//!
//! The ledger is created inside the pass and dropped at the end; the
//! inventory snapshot is never mutated, so `remaining = available -
//! committed` stays auditable against the original store throughout.

use std::cmp::Ordering;
use std::collections::HashMap;

use brickforge_catalog::{Margin, Money, PartInventory, PartRef};
use tracing::{debug, info};

use crate::candidate::{BuildCandidate, MissingPart};
use crate::scorer;

/// Remark attached to matched parts that phase 1 already committed.
const RESERVED_REMARK: &str = "Parts reserved for higher-priority minifigures";

/// Units already committed to accepted builds, by part slot.
///
/// Pass-local: starts empty, grows monotonically, discarded with the pass.
/// Never a module-level static, so concurrent or repeated runs cannot
/// interfere.
#[derive(Debug, Default)]
pub struct AllocationLedger {
    /// Committed units per part slot.
    committed: HashMap<PartRef, u32>,
}

impl AllocationLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Units already committed for one part slot.
    #[inline]
    #[must_use]
    pub fn committed(&self, part: &PartRef) -> u32 {
        self.committed.get(part).copied().unwrap_or(0)
    }

    /// Commits additional units for one part slot.
    pub fn commit(&mut self, part: &PartRef, units: u32) {
        if units == 0 {
            return;
        }
        let entry = self.committed.entry(part.clone()).or_insert(0);
        *entry = entry.saturating_add(units);
    }

    /// Ledger-adjusted availability: `original - committed`, floored at 0.
    #[inline]
    #[must_use]
    pub fn remaining(&self, inventory: &PartInventory, part: &PartRef) -> u32 {
        inventory.quantity_of(part).saturating_sub(self.committed(part))
    }
}

/// Runs the full two-phase allocation over scored candidates.
///
/// Returns the accepted builds: complete builds (phase-1 order, with
/// `buildable_count` set to the committed copy count) followed by partial
/// builds (phase-2 order, re-scored against the remaining availability).
#[must_use]
pub fn allocate(inventory: &PartInventory, candidates: &[BuildCandidate]) -> Vec<BuildCandidate> {
    let mut ledger = AllocationLedger::new();
    let mut accepted = Vec::new();

    // Phase 1: complete builds, best profit first.
    let mut complete: Vec<&BuildCandidate> =
        candidates.iter().filter(|c| c.can_build).collect();
    complete.sort_by(|a, b| complete_priority(a, b));

    for candidate in complete {
        match try_commit(&ledger, inventory, candidate) {
            Some(copies) => {
                for detail in &candidate.matched_details {
                    ledger.commit(&detail.part, detail.quantity.saturating_mul(copies));
                }
                debug!(
                    minifig_id = %candidate.minifig_id,
                    copies,
                    "complete build accepted"
                );
                let mut build = candidate.clone();
                build.buildable_count = copies;
                accepted.push(build);
            }
            None => {
                debug!(
                    minifig_id = %candidate.minifig_id,
                    "stock consumed by higher priority, deferred to partial pass"
                );
            }
        }
    }

    let complete_count = accepted.len();

    // Phase 2: partial builds over whatever stock phase 1 left behind.
    let mut partial: Vec<(&BuildCandidate, Money)> = candidates
        .iter()
        .filter(|c| c.matched_parts > 0)
        .map(|c| (c, scorer::parts_cost(c)))
        .collect();
    partial.sort_by(|a, b| partial_priority(a, b));

    for (candidate, _) in partial {
        if let Some(build) = carve_partial(&ledger, inventory, candidate) {
            accepted.push(build);
        }
    }

    info!(
        candidates = candidates.len(),
        complete = complete_count,
        partial = accepted.len() - complete_count,
        "allocation pass finished"
    );
    accepted
}

/// Phase-1 sort key: match percentage, profit, year - all descending,
/// missing year sorting as 0. Stable, so exact ties keep enumeration
/// order.
fn complete_priority(a: &BuildCandidate, b: &BuildCandidate) -> Ordering {
    b.match_percentage
        .total_cmp(&a.match_percentage)
        .then_with(|| b.profit.cmp(&a.profit))
        .then_with(|| b.year_released.unwrap_or(0).cmp(&a.year_released.unwrap_or(0)))
}

/// Phase-2 sort key: match percentage, parts cost, year - all descending.
fn partial_priority(a: &(&BuildCandidate, Money), b: &(&BuildCandidate, Money)) -> Ordering {
    b.0.match_percentage
        .total_cmp(&a.0.match_percentage)
        .then_with(|| b.1.cmp(&a.1))
        .then_with(|| {
            b.0.year_released
                .unwrap_or(0)
                .cmp(&a.0.year_released.unwrap_or(0))
        })
}

/// Checks a complete candidate against ledger-adjusted availability.
///
/// Returns the copy count to commit, or `None` when any required part no
/// longer has enough remaining stock. Checks every line before anything
/// is committed, so a rejected candidate leaves the ledger untouched.
fn try_commit(
    ledger: &AllocationLedger,
    inventory: &PartInventory,
    candidate: &BuildCandidate,
) -> Option<u32> {
    let mut copies: Option<u32> = None;
    for detail in &candidate.matched_details {
        let remaining = ledger.remaining(inventory, &detail.part);
        if remaining < detail.quantity {
            return None;
        }
        let per_part = remaining / detail.quantity;
        copies = Some(copies.map_or(per_part, |c| c.min(per_part)));
    }
    // A complete candidate always has matched lines; a single copy is the
    // floor because every line just passed the remaining >= needed check.
    copies.filter(|&c| c >= 1)
}

/// Re-scores one candidate against what phase 1 left available.
///
/// Returns `None` when nothing remains available (no partial worth
/// reporting) or when everything does (the candidate already belongs to
/// the complete-build outcome and would be a duplicate here).
fn carve_partial(
    ledger: &AllocationLedger,
    inventory: &PartInventory,
    candidate: &BuildCandidate,
) -> Option<BuildCandidate> {
    let mut still_available = Vec::new();
    let mut now_unavailable = Vec::new();

    for detail in &candidate.matched_details {
        let remaining = ledger.remaining(inventory, &detail.part);
        if remaining >= detail.quantity {
            still_available.push(detail.clone());
        } else {
            now_unavailable.push(MissingPart {
                part: detail.part.clone(),
                part_name: detail.part_name.clone(),
                color_name: detail.color_name.clone(),
                needed: detail.quantity,
                available: remaining,
                short_by: detail.quantity - remaining,
                price: detail.price,
                remarks: RESERVED_REMARK.to_string(),
            });
        }
    }

    if still_available.is_empty() {
        return None;
    }
    if still_available.len() == candidate.total_parts as usize {
        return None;
    }

    let matched = u32::try_from(still_available.len()).unwrap_or(u32::MAX);
    let mut missing_details = now_unavailable;
    missing_details.extend(candidate.missing_details.iter().cloned());

    Some(BuildCandidate {
        minifig_id: candidate.minifig_id.clone(),
        minifig_name: candidate.minifig_name.clone(),
        year_released: candidate.year_released,
        category_name: candidate.category_name.clone(),
        total_parts: candidate.total_parts,
        matched_parts: matched,
        missing_parts: candidate.total_parts - matched,
        match_percentage: f64::from(matched) / f64::from(candidate.total_parts) * 100.0,
        can_build: false,
        buildable_count: 0,
        matched_details: still_available,
        missing_details,
        price_guide: candidate.price_guide.clone(),
        profit: Margin::ZERO,
    })
}

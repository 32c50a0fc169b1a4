//! # Recipe Matcher
//!
//! Evaluates one recipe against the merged inventory: which regular parts
//! are covered, which are short, and how many complete copies the current
//! stock could support.
//!
//! Malformed recipes (no regular parts, or a zero required quantity) are
//! not matchable - the matcher returns absence, never a zero-match
//! candidate and never an error.

use brickforge_catalog::{Margin, MinifigRecipe, PartInventory, PriceBook};
use tracing::info;

use crate::candidate::{BuildCandidate, MatchedPart, MissingPart};
use crate::scorer;

/// Matches one recipe against the inventory.
///
/// Returns `None` for recipes excluded from candidacy: zero regular parts,
/// or any regular part requiring zero units.
///
/// A part is matched iff `available >= needed`. `buildable_count` is the
/// minimum over all regular parts of `floor(available / needed)` - how many
/// identical copies the stock supports simultaneously, not merely whether
/// one can be built.
#[must_use]
pub fn match_recipe(recipe: &MinifigRecipe, inventory: &PartInventory) -> Option<BuildCandidate> {
    let regular: Vec<_> = recipe.regular_parts().collect();
    if regular.is_empty() || regular.iter().any(|p| p.quantity == 0) {
        return None;
    }

    let mut matched_details = Vec::new();
    let mut missing_details = Vec::new();
    let mut copy_limit: Option<u32> = None;

    for required in &regular {
        let avail = inventory.available(&required.part);
        let limit = avail.quantity / required.quantity;
        copy_limit = Some(copy_limit.map_or(limit, |c| c.min(limit)));

        if avail.quantity >= required.quantity {
            matched_details.push(MatchedPart {
                part: required.part.clone(),
                part_name: required.part_name.clone(),
                color_name: required.color_name.clone(),
                quantity: required.quantity,
                price: avail.unit_price,
                total_price: avail.unit_price.saturating_mul_count(u64::from(required.quantity)),
                remarks: avail.remarks,
            });
        } else {
            missing_details.push(MissingPart {
                part: required.part.clone(),
                part_name: required.part_name.clone(),
                color_name: required.color_name.clone(),
                needed: required.quantity,
                available: avail.quantity,
                short_by: required.quantity - avail.quantity,
                price: avail.unit_price,
                remarks: if avail.quantity > 0 {
                    avail.remarks
                } else {
                    String::new()
                },
            });
        }
    }

    let total = u32::try_from(regular.len()).unwrap_or(u32::MAX);
    let matched = u32::try_from(matched_details.len()).unwrap_or(u32::MAX);
    let can_build = matched == total;

    Some(BuildCandidate {
        minifig_id: recipe.minifig_id.clone(),
        minifig_name: recipe.name.clone(),
        year_released: recipe.year_released,
        category_name: recipe.category_name.clone(),
        total_parts: total,
        matched_parts: matched,
        missing_parts: total - matched,
        match_percentage: f64::from(matched) / f64::from(total) * 100.0,
        can_build,
        buildable_count: copy_limit.unwrap_or(0),
        matched_details,
        missing_details,
        price_guide: None,
        profit: Margin::ZERO,
    })
}

/// Matches every recipe and annotates the results with price data and the
/// profit sort key.
///
/// Candidates that matched nothing at all are kept here (they are filtered
/// by the allocator's phases); recipes excluded from candidacy are absent.
#[must_use]
pub fn evaluate_candidates(
    inventory: &PartInventory,
    recipes: &[MinifigRecipe],
    prices: &PriceBook,
) -> Vec<BuildCandidate> {
    let mut candidates: Vec<BuildCandidate> = recipes
        .iter()
        .filter_map(|recipe| match_recipe(recipe, inventory))
        .collect();

    for candidate in &mut candidates {
        candidate.price_guide = prices.get(&candidate.minifig_id).cloned();
        if candidate.can_build {
            candidate.profit = scorer::profit(candidate, candidate.price_guide.as_ref());
        }
    }

    info!(
        recipes = recipes.len(),
        candidates = candidates.len(),
        "matched candidate set"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickforge_catalog::{
        InventoryLine, Money, PartFlags, PartRef, RequiredPart,
    };

    fn inventory(lines: Vec<(&str, u32, u32, &str)>) -> PartInventory {
        PartInventory::from_lines(lines.into_iter().map(|(id, color, qty, price)| {
            InventoryLine {
                part: PartRef::new(id, color),
                quantity: qty,
                unit_price: price.parse().unwrap(),
                remarks: String::new(),
            }
        }))
    }

    fn recipe(id: &str, parts: Vec<RequiredPart>) -> MinifigRecipe {
        MinifigRecipe::new(id, format!("Minifig {id}"), parts).unwrap()
    }

    #[test]
    fn test_complete_match() {
        let inv = inventory(vec![("3626b", 14, 4, "0.10"), ("973", 15, 2, "0.50")]);
        let r = recipe(
            "sw0001",
            vec![
                RequiredPart::new(PartRef::new("3626b", 14), "Head", "Yellow", 1),
                RequiredPart::new(PartRef::new("973", 15), "Torso", "White", 1),
            ],
        );
        let c = match_recipe(&r, &inv).unwrap();
        assert!(c.can_build);
        assert_eq!(c.matched_parts, 2);
        assert_eq!(c.missing_parts, 0);
        assert!((c.match_percentage - 100.0).abs() < f64::EPSILON);
        // Torso is the binding constraint: min(4/1, 2/1) = 2 copies.
        assert_eq!(c.buildable_count, 2);
    }

    #[test]
    fn test_partial_match_detail() {
        let inv = inventory(vec![("3626b", 14, 1, "0.10"), ("973", 15, 2, "0.50")]);
        let r = recipe(
            "sw0002",
            vec![
                RequiredPart::new(PartRef::new("3626b", 14), "Head", "Yellow", 3),
                RequiredPart::new(PartRef::new("973", 15), "Torso", "White", 1),
            ],
        );
        let c = match_recipe(&r, &inv).unwrap();
        assert!(!c.can_build);
        assert_eq!(c.matched_parts, 1);
        assert_eq!(c.missing_parts, 1);
        assert_eq!(c.buildable_count, 0);
        let missing = &c.missing_details[0];
        assert_eq!(missing.needed, 3);
        assert_eq!(missing.available, 1);
        assert_eq!(missing.short_by, 2);
    }

    #[test]
    fn test_line_totals_multiply_quantity() {
        let inv = inventory(vec![("2420", 0, 8, "0.25")]);
        let r = recipe(
            "cty0001",
            vec![RequiredPart::new(PartRef::new("2420", 0), "Plate", "Black", 4)],
        );
        let c = match_recipe(&r, &inv).unwrap();
        assert_eq!(c.matched_details[0].total_price, Money::from_whole(1));
        assert_eq!(c.buildable_count, 2);
    }

    #[test]
    fn test_alternates_and_counterparts_ignored() {
        let inv = inventory(vec![("3626b", 14, 1, "0.10")]);
        let r = recipe(
            "sw0003",
            vec![
                RequiredPart::new(PartRef::new("3626b", 14), "Head", "Yellow", 1),
                RequiredPart::new(PartRef::new("9999", 0), "Alt", "Black", 1)
                    .with_flags(PartFlags::ALTERNATE),
                RequiredPart::new(PartRef::new("8888", 0), "Counter", "Black", 1)
                    .with_flags(PartFlags::COUNTERPART),
            ],
        );
        let c = match_recipe(&r, &inv).unwrap();
        assert_eq!(c.total_parts, 1);
        assert!(c.can_build);
    }

    #[test]
    fn test_no_regular_parts_is_not_a_candidate() {
        let inv = inventory(vec![]);
        let r = recipe(
            "sw0004",
            vec![RequiredPart::new(PartRef::new("9999", 0), "Alt", "Black", 1)
                .with_flags(PartFlags::ALTERNATE)],
        );
        assert!(match_recipe(&r, &inv).is_none());
    }

    #[test]
    fn test_zero_required_quantity_is_not_a_candidate() {
        let inv = inventory(vec![("3626b", 14, 1, "0.10")]);
        let r = recipe(
            "sw0005",
            vec![RequiredPart::new(PartRef::new("3626b", 14), "Head", "Yellow", 0)],
        );
        assert!(match_recipe(&r, &inv).is_none());
    }

    #[test]
    fn test_missing_remarks_only_when_partially_stocked() {
        let inv = PartInventory::from_lines(vec![InventoryLine {
            part: PartRef::new("3626b", 14),
            quantity: 1,
            unit_price: "0.10".parse().unwrap(),
            remarks: "drawer 2".to_string(),
        }]);
        let r = recipe(
            "sw0006",
            vec![
                RequiredPart::new(PartRef::new("3626b", 14), "Head", "Yellow", 2),
                RequiredPart::new(PartRef::new("973", 15), "Torso", "White", 1),
            ],
        );
        let c = match_recipe(&r, &inv).unwrap();
        let head = c.missing_details.iter().find(|m| m.part.part_id == "3626b").unwrap();
        assert_eq!(head.remarks, "drawer 2");
        let torso = c.missing_details.iter().find(|m| m.part.part_id == "973").unwrap();
        assert!(torso.remarks.is_empty());
    }
}

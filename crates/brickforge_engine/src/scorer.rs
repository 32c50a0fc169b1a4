//! # Scorer
//!
//! Pure functions producing the two sort keys: profit for complete
//! candidates, parts cost for partial ones. No side effects, no errors -
//! missing price data degrades to zero, which is deliberately
//! indistinguishable from break-even (a compatibility decision, see
//! DESIGN.md).

use brickforge_catalog::{Margin, Money, PriceGuide};

use crate::candidate::BuildCandidate;

/// Summed cost of the candidate's matched lines.
///
/// Used to rank partial candidates, where profit is not computable because
/// the build is incomplete. Higher-cost part sets get priority.
#[must_use]
pub fn parts_cost(candidate: &BuildCandidate) -> Money {
    candidate
        .matched_details
        .iter()
        .fold(Money::ZERO, |acc, d| acc.saturating_add(d.total_price))
}

/// Profit of a complete build: market value minus parts cost.
///
/// Market value prefers the six-month used-condition average (realistic
/// for resale) and falls back to new condition when used is absent. With
/// no price data at all, or no matched lines, profit is zero.
#[must_use]
pub fn profit(candidate: &BuildCandidate, guide: Option<&PriceGuide>) -> Margin {
    if candidate.matched_details.is_empty() {
        return Margin::ZERO;
    }
    let Some(market_value) = guide.and_then(PriceGuide::market_value) else {
        return Margin::ZERO;
    };
    market_value.signed_diff(parts_cost(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickforge_catalog::{PartRef, PriceSample};

    use crate::candidate::MatchedPart;

    fn candidate_with_lines(lines: Vec<(&str, u32, &str, u32)>) -> BuildCandidate {
        let matched_details: Vec<MatchedPart> = lines
            .into_iter()
            .map(|(id, color, price, qty)| {
                let price: Money = price.parse().unwrap();
                MatchedPart {
                    part: PartRef::new(id, color),
                    part_name: String::new(),
                    color_name: String::new(),
                    quantity: qty,
                    price,
                    total_price: price.saturating_mul_count(u64::from(qty)),
                    remarks: String::new(),
                }
            })
            .collect();
        let matched = u32::try_from(matched_details.len()).unwrap();
        BuildCandidate {
            minifig_id: "test".to_string(),
            minifig_name: "Test".to_string(),
            year_released: None,
            category_name: String::new(),
            total_parts: matched,
            matched_parts: matched,
            missing_parts: 0,
            match_percentage: 100.0,
            can_build: true,
            buildable_count: 1,
            matched_details,
            missing_details: vec![],
            price_guide: None,
            profit: Margin::ZERO,
        }
    }

    fn guide(new: Option<&str>, used: Option<&str>) -> PriceGuide {
        let sample = |p: Option<&str>| {
            p.map(|p| PriceSample {
                avg_price: Some(p.parse().unwrap()),
            })
        };
        PriceGuide {
            ordered_new: sample(new),
            ordered_used: sample(used),
        }
    }

    #[test]
    fn test_parts_cost_sums_line_totals() {
        let c = candidate_with_lines(vec![("a", 1, "0.50", 2), ("b", 2, "1.25", 1)]);
        assert_eq!(parts_cost(&c), "2.25".parse().unwrap());
    }

    #[test]
    fn test_profit_prefers_used_price() {
        let c = candidate_with_lines(vec![("a", 1, "1.00", 1)]);
        let g = guide(Some("10.00"), Some("4.00"));
        assert_eq!(profit(&c, Some(&g)), Money::from_whole(4).signed_diff(Money::from_whole(1)));
    }

    #[test]
    fn test_profit_falls_back_to_new() {
        let c = candidate_with_lines(vec![("a", 1, "1.00", 1)]);
        let g = guide(Some("10.00"), None);
        assert_eq!(
            profit(&c, Some(&g)),
            Money::from_whole(10).signed_diff(Money::from_whole(1))
        );
    }

    #[test]
    fn test_profit_can_be_negative() {
        let c = candidate_with_lines(vec![("a", 1, "8.00", 1)]);
        let g = guide(None, Some("5.00"));
        assert!(profit(&c, Some(&g)).is_negative());
    }

    #[test]
    fn test_no_price_data_degrades_to_zero() {
        let c = candidate_with_lines(vec![("a", 1, "1.00", 1)]);
        assert_eq!(profit(&c, None), Margin::ZERO);
        assert_eq!(profit(&c, Some(&PriceGuide::default())), Margin::ZERO);
    }
}

//! # Market Price Guides
//!
//! Six-month average sale prices per minifigure, split by condition.
//! Every level is optional: a minifigure may have no guide at all, a guide
//! with only one condition, or a condition block with no average. Missing
//! data is a first-class state here, never a lookup error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Aggregated sales for one condition over the trailing six months.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Average sale price, when any sales were recorded.
    #[serde(default)]
    pub avg_price: Option<Money>,
}

/// Six-month price guide for one minifigure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceGuide {
    /// Completed sales in new condition.
    #[serde(default)]
    pub ordered_new: Option<PriceSample>,
    /// Completed sales in used condition.
    #[serde(default)]
    pub ordered_used: Option<PriceSample>,
}

impl PriceGuide {
    /// The market value used for profit: the used-condition average when
    /// present (resale realism), otherwise the new-condition average.
    #[must_use]
    pub fn market_value(&self) -> Option<Money> {
        self.ordered_used
            .as_ref()
            .and_then(|s| s.avg_price)
            .or_else(|| self.ordered_new.as_ref().and_then(|s| s.avg_price))
    }

    /// Six-month average for new condition, if known.
    #[must_use]
    pub fn new_condition(&self) -> Option<Money> {
        self.ordered_new.as_ref().and_then(|s| s.avg_price)
    }

    /// Six-month average for used condition, if known.
    #[must_use]
    pub fn used_condition(&self) -> Option<Money> {
        self.ordered_used.as_ref().and_then(|s| s.avg_price)
    }
}

/// Price guides keyed by minifigure id.
pub type PriceBook = HashMap<String, PriceGuide>;

//! # Part Inventory Store
//!
//! The merged, read-only view of a user's parts. Duplicate inventory lines
//! for the same part slot are merged at load time: quantities sum, the unit
//! price comes from the first line seen, and the remark from the first
//! non-empty one.
//!
//! The store is never mutated after load. Allocation state is tracked in a
//! separate ledger so the original snapshot stays inspectable all the way
//! through a run.

use std::collections::HashMap;

use crate::money::Money;
use crate::part::PartRef;

/// One raw inventory line before merging.
///
/// A store export may list the same part slot many times (different bins,
/// different lots); the [`PartInventory`] constructor folds them together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryLine {
    /// The part slot this line adds stock to.
    pub part: PartRef,
    /// Units on this line.
    pub quantity: u32,
    /// Listed unit price, zero if the line carries none.
    pub unit_price: Money,
    /// Free-form remark (storage bin, condition note).
    pub remarks: String,
}

/// Merged stock for one part slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryEntry {
    /// Total units on hand, summed across duplicate lines.
    pub quantity: u32,
    /// Unit price from the first line seen for this slot.
    pub unit_price: Money,
    /// First non-empty remark seen for this slot.
    pub remarks: String,
}

/// Availability of one part slot, as seen by the matcher.
///
/// A lookup miss is not an error: it reads as zero stock at zero price
/// with no remark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Availability {
    /// Units on hand.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Money,
    /// Remark attached to the stock.
    pub remarks: String,
}

impl Availability {
    /// The zero availability returned for unknown part slots.
    #[must_use]
    fn none() -> Self {
        Self {
            quantity: 0,
            unit_price: Money::ZERO,
            remarks: String::new(),
        }
    }
}

/// The merged parts inventory, immutable for the lifetime of a run.
#[derive(Clone, Debug, Default)]
pub struct PartInventory {
    /// Merged stock per part slot.
    entries: HashMap<PartRef, InventoryEntry>,
}

impl PartInventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a merged inventory from raw lines.
    ///
    /// Quantities for the same part slot are summed. The unit price keeps
    /// the first line's value even when it is zero; remarks keep the first
    /// non-empty value.
    #[must_use]
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = InventoryLine>,
    {
        let mut inventory = Self::new();
        for line in lines {
            inventory.merge_line(line);
        }
        inventory
    }

    /// Merges one raw line into the store.
    fn merge_line(&mut self, line: InventoryLine) {
        match self.entries.get_mut(&line.part) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(line.quantity);
                if entry.remarks.is_empty() && !line.remarks.is_empty() {
                    entry.remarks = line.remarks;
                }
            }
            None => {
                self.entries.insert(
                    line.part,
                    InventoryEntry {
                        quantity: line.quantity,
                        unit_price: line.unit_price,
                        remarks: line.remarks,
                    },
                );
            }
        }
    }

    /// Looks up the availability of one part slot.
    ///
    /// Unknown slots read as zero stock, zero price, empty remark.
    #[must_use]
    pub fn available(&self, part: &PartRef) -> Availability {
        self.entries.get(part).map_or_else(Availability::none, |e| {
            Availability {
                quantity: e.quantity,
                unit_price: e.unit_price,
                remarks: e.remarks.clone(),
            }
        })
    }

    /// Looks up only the on-hand quantity of one part slot.
    ///
    /// Cheaper than [`PartInventory::available`] when the caller does not
    /// need price or remark - the allocator calls this in its inner loop.
    #[inline]
    #[must_use]
    pub fn quantity_of(&self, part: &PartRef) -> u32 {
        self.entries.get(part).map_or(0, |e| e.quantity)
    }

    /// Number of unique part slots.
    #[must_use]
    pub fn unique_parts(&self) -> usize {
        self.entries.len()
    }

    /// Total units across all slots.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.quantity)).sum()
    }

    /// True when the inventory holds no parts at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the merged entries.
    pub fn iter(&self) -> impl Iterator<Item = (&PartRef, &InventoryEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(part_id: &str, color: u32, qty: u32, price: &str, remarks: &str) -> InventoryLine {
        InventoryLine {
            part: PartRef::new(part_id, color),
            quantity: qty,
            unit_price: price.parse().unwrap(),
            remarks: remarks.to_string(),
        }
    }

    #[test]
    fn test_duplicate_lines_sum_quantities() {
        let inv = PartInventory::from_lines(vec![
            line("3626b", 4, 10, "0.05", ""),
            line("3626b", 4, 5, "0.08", ""),
        ]);
        let avail = inv.available(&PartRef::new("3626b", 4));
        assert_eq!(avail.quantity, 15);
    }

    #[test]
    fn test_price_first_wins_even_when_zero() {
        let inv = PartInventory::from_lines(vec![
            line("3626b", 4, 1, "0", ""),
            line("3626b", 4, 1, "0.99", ""),
        ]);
        assert_eq!(inv.available(&PartRef::new("3626b", 4)).unit_price, Money::ZERO);
    }

    #[test]
    fn test_remarks_first_non_empty_wins() {
        let inv = PartInventory::from_lines(vec![
            line("973", 11, 1, "0.50", ""),
            line("973", 11, 1, "0.50", "bin 7"),
            line("973", 11, 1, "0.50", "bin 9"),
        ]);
        assert_eq!(inv.available(&PartRef::new("973", 11)).remarks, "bin 7");
    }

    #[test]
    fn test_unknown_slot_reads_as_zero() {
        let inv = PartInventory::new();
        let avail = inv.available(&PartRef::new("9999", 1));
        assert_eq!(avail.quantity, 0);
        assert_eq!(avail.unit_price, Money::ZERO);
        assert!(avail.remarks.is_empty());
    }

    #[test]
    fn test_counters() {
        let inv = PartInventory::from_lines(vec![
            line("3626b", 4, 10, "0.05", ""),
            line("973", 11, 2, "0.50", ""),
        ]);
        assert_eq!(inv.unique_parts(), 2);
        assert_eq!(inv.total_units(), 12);
        assert!(!inv.is_empty());
    }
}

//! # BrickLink Inventory Loading
//!
//! Parses a BrickLink store inventory export:
//!
//! ```xml
//! <INVENTORY>
//!   <ITEM>
//!     <ITEMID>3626b</ITEMID>
//!     <ITEMTYPE>P</ITEMTYPE>
//!     <COLOR>11</COLOR>
//!     <QTY>10</QTY>
//!     <PRICE>0.0525</PRICE>
//!     <REMARKS>bin 3</REMARKS>
//!   </ITEM>
//! </INVENTORY>
//! ```
//!
//! Only parts (`P`) and minifigures (`M`) are kept. Missing prices and
//! remarks degrade to zero/empty. Prices are parsed as fixed-point
//! decimal strings - they never round-trip through a float.

use std::fs;
use std::path::Path;

use brickforge_catalog::{InventoryLine, Money, PartInventory, PartRef};
use serde::Deserialize;

use crate::error::BuilderError;

/// Raw `<ITEM>` element.
#[derive(Debug, Deserialize)]
struct StoreItemXml {
    /// `<ITEMID>` - the part or minifig number.
    #[serde(rename = "ITEMID")]
    item_id: String,
    /// `<ITEMTYPE>` - `P`, `M`, `S`, ...
    #[serde(rename = "ITEMTYPE")]
    item_type: String,
    /// `<COLOR>` - absent for colorless item types.
    #[serde(rename = "COLOR", default)]
    color: u32,
    /// `<QTY>` - lots removed from a store can carry negative counts.
    #[serde(rename = "QTY", default)]
    qty: i64,
    /// `<PRICE>` - optional decimal literal.
    #[serde(rename = "PRICE", default)]
    price: Option<String>,
    /// `<REMARKS>` - optional free text.
    #[serde(rename = "REMARKS", default)]
    remarks: Option<String>,
}

/// Raw `<INVENTORY>` document.
#[derive(Debug, Deserialize)]
struct StoreInventoryXml {
    /// The item list.
    #[serde(rename = "ITEM", default)]
    items: Vec<StoreItemXml>,
}

/// Parses a BrickLink inventory document into the merged store.
///
/// # Errors
///
/// Returns [`BuilderError`] for malformed XML or unparseable price
/// literals. Sparse data (no price, no remark, no color) is not an error.
pub fn parse_inventory(xml: &str) -> Result<PartInventory, BuilderError> {
    let doc: StoreInventoryXml = quick_xml::de::from_str(xml)?;

    let mut lines = Vec::with_capacity(doc.items.len());
    for item in doc.items {
        if item.item_type != "P" && item.item_type != "M" {
            continue;
        }
        let unit_price = match item.price.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.parse::<Money>()?,
            _ => Money::ZERO,
        };
        lines.push(InventoryLine {
            part: PartRef::new(item.item_id, item.color),
            quantity: u32::try_from(item.qty.max(0)).unwrap_or(u32::MAX),
            unit_price,
            remarks: item.remarks.unwrap_or_default(),
        });
    }
    Ok(PartInventory::from_lines(lines))
}

/// Reads and parses a BrickLink inventory file.
///
/// # Errors
///
/// Returns [`BuilderError`] when the file cannot be read or parsed.
pub fn load_inventory(path: &Path) -> Result<PartInventory, BuilderError> {
    let xml = fs::read_to_string(path)?;
    parse_inventory(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <INVENTORY>
          <ITEM>
            <ITEMID>3626b</ITEMID>
            <ITEMTYPE>P</ITEMTYPE>
            <COLOR>11</COLOR>
            <QTY>10</QTY>
            <PRICE>0.0525</PRICE>
            <REMARKS>bin 3</REMARKS>
          </ITEM>
          <ITEM>
            <ITEMID>3626b</ITEMID>
            <ITEMTYPE>P</ITEMTYPE>
            <COLOR>11</COLOR>
            <QTY>5</QTY>
            <PRICE>0.10</PRICE>
          </ITEM>
          <ITEM>
            <ITEMID>sw0001</ITEMID>
            <ITEMTYPE>M</ITEMTYPE>
            <COLOR>0</COLOR>
            <QTY>1</QTY>
          </ITEM>
          <ITEM>
            <ITEMID>75192-1</ITEMID>
            <ITEMTYPE>S</ITEMTYPE>
            <COLOR>0</COLOR>
            <QTY>1</QTY>
          </ITEM>
        </INVENTORY>
    "#;

    #[test]
    fn test_sets_are_filtered_out() {
        let inv = parse_inventory(SAMPLE).unwrap();
        assert_eq!(inv.unique_parts(), 2);
        assert_eq!(inv.quantity_of(&PartRef::new("75192-1", 0)), 0);
    }

    #[test]
    fn test_duplicate_lines_merge() {
        let inv = parse_inventory(SAMPLE).unwrap();
        let avail = inv.available(&PartRef::new("3626b", 11));
        assert_eq!(avail.quantity, 15);
        // First line wins price and remarks.
        assert_eq!(avail.unit_price, "0.0525".parse().unwrap());
        assert_eq!(avail.remarks, "bin 3");
    }

    #[test]
    fn test_missing_price_degrades_to_zero() {
        let inv = parse_inventory(SAMPLE).unwrap();
        let avail = inv.available(&PartRef::new("sw0001", 0));
        assert_eq!(avail.unit_price, Money::ZERO);
        assert!(avail.remarks.is_empty());
    }

    #[test]
    fn test_negative_quantity_clamps_to_zero() {
        let xml = r#"
            <INVENTORY>
              <ITEM>
                <ITEMID>3001</ITEMID>
                <ITEMTYPE>P</ITEMTYPE>
                <COLOR>5</COLOR>
                <QTY>-3</QTY>
              </ITEM>
            </INVENTORY>
        "#;
        let inv = parse_inventory(xml).unwrap();
        assert_eq!(inv.quantity_of(&PartRef::new("3001", 5)), 0);
    }

    #[test]
    fn test_malformed_price_is_an_error() {
        let xml = r#"
            <INVENTORY>
              <ITEM>
                <ITEMID>3001</ITEMID>
                <ITEMTYPE>P</ITEMTYPE>
                <COLOR>5</COLOR>
                <QTY>1</QTY>
                <PRICE>about a dollar</PRICE>
              </ITEM>
            </INVENTORY>
        "#;
        assert!(matches!(
            parse_inventory(xml),
            Err(BuilderError::Catalog(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        let inv = parse_inventory("<INVENTORY></INVENTORY>").unwrap();
        assert!(inv.is_empty());
    }
}

//! # BRICKFORGE Catalog
//!
//! Data model for the minifigure build analyzer.
//!
//! ## Design Principles
//!
//! 1. **Zero floating point** - All price data uses fixed-point
//!    ([`Money`], [`Margin`])
//! 2. **Read-only inventory** - The merged store is immutable for the
//!    lifetime of a run; allocation state lives elsewhere
//! 3. **Explicit absence** - Missing prices and unknown part slots are
//!    typed states, not lookup errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use brickforge_catalog::{InventoryLine, PartInventory, PartRef};
//!
//! let inventory = PartInventory::from_lines(lines);
//! let avail = inventory.available(&PartRef::new("3626b", 4));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod inventory;
pub mod money;
pub mod part;
pub mod price;
pub mod recipe;

pub use error::CatalogError;
pub use inventory::{Availability, InventoryEntry, InventoryLine, PartInventory};
pub use money::{Margin, Money};
pub use part::{ColorId, PartFlags, PartRef};
pub use price::{PriceBook, PriceGuide, PriceSample};
pub use recipe::{MinifigRecipe, RequiredPart};

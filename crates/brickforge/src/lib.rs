//! # BRICKFORGE
//!
//! Minifigure build analysis from BrickLink store inventories.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BRICKFORGE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌───────────────┐    ┌───────────────┐    ┌─────────────┐  │
//! │  │ CATALOG       │───>│ ENGINE        │───>│ BOUNDARY    │  │
//! │  │               │    │               │    │ (this crate)│  │
//! │  │ • Inventory   │    │ • Matcher     │    │ • Config    │  │
//! │  │ • Recipes     │    │ • Scorer      │    │ • XML load  │  │
//! │  │ • Prices      │    │ • Allocator   │    │ • Snapshots │  │
//! │  │ • Money       │    │ • Assembler   │    │ • Report    │  │
//! │  └───────────────┘    └───────────────┘    └─────────────┘  │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML run configuration
//! - `inventory_xml`: BrickLink store XML loading
//! - `snapshot`: pre-fetched catalog/price JSON loading
//! - `report_file`: JSON report writing

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod inventory_xml;
pub mod report_file;
pub mod snapshot;

// Re-export the lower layers
pub use brickforge_catalog as catalog;
pub use brickforge_engine as engine;

// Re-export commonly used types
pub use config::BuilderConfig;
pub use error::BuilderError;

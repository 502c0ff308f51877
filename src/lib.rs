//! # werte
//!
//! Immutable value objects: GS1 identifier barcodes, money, measurement
//! quantities, geographic coordinates, and region codes.
//!
//! Every type follows the same shape: sealed construction (private
//! fields, no public constructor), a validating factory returning
//! `Result`, value equality, and string conversion. All monetary and
//! measurement arithmetic uses [`rust_decimal::Decimal`] — never floating
//! point.
//!
//! ## Quick start
//!
//! ```rust
//! use werte::barcode::{Gtin8, Gtin13};
//!
//! let gtin = Gtin13::parse("4006381333931").unwrap();
//! assert_eq!(gtin.as_str(), "4006381333931");
//! assert!(Gtin13::parse("4006381333932").is_err());
//!
//! // formatting separators are stripped for validation but kept for display
//! let small = Gtin8::parse("4719-5127").unwrap();
//! assert_eq!(small.to_string(), "4719-5127");
//! assert_eq!(small.digits(), "47195127");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `barcode` (default) | GS1 identifiers: GTIN-8/12/13/14, GLN, SSCC, GSRN, GDTI, GRAI, UDI |
//! | `money` | ISO 4217 currencies and decimal money arithmetic |
//! | `measure` | Length, mass, area, volume, capacity and count quantities |
//! | `geo` | Geographic coordinates |
//! | `region` | ISO 3166-1 country and ISO 639-1 language codes |
//! | `all` | Everything |

#[cfg(feature = "barcode")]
pub mod barcode;

#[cfg(feature = "money")]
pub mod money;

#[cfg(feature = "measure")]
pub mod measure;

#[cfg(feature = "geo")]
pub mod geo;

#[cfg(feature = "region")]
pub mod region;

// Re-export the core identifier types at the crate root for convenience
#[cfg(feature = "barcode")]
pub use crate::barcode::*;

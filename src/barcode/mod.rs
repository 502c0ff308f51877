//! GS1 identifier value objects.
//!
//! All identifiers share the same construction shape: [`parse`] strips
//! formatting separators, validates length, structure and the GS1 check
//! digit, and on success stores the original string (formatting
//! preserved) alongside the normalized digit payload. Construction is
//! atomic; instances are immutable.
//!
//! Equality compares the stored *original* string, not the normalized
//! payload: two checksum-equivalent inputs with different formatting
//! (`"42345671"` vs `"4234-5671"`) are **not** equal. This mirrors the
//! historical behavior of the identifiers and is deliberate — see the
//! per-type docs.
//!
//! [`parse`]: Gtin13::parse

mod checksum;
mod error;
mod gdti;
mod gln;
mod grai;
mod gsrn;
mod gtin;
mod normalize;
mod sscc;
mod udi;

pub use checksum::{check_digit, has_valid_check_digit};
pub use error::InvalidBarcode;
pub use gdti::Gdti;
pub use gln::Gln;
pub use grai::Grai;
pub use gsrn::Gsrn;
pub use gtin::{Gtin8, Gtin12, Gtin13, Gtin14};
pub use normalize::strip_formatting;
pub use sscc::Sscc;
pub use udi::Udi;

/// Generates a fixed-length GS1 identifier wrapper: sealed struct,
/// validating `parse` factory, accessors, `Display`, `FromStr` and
/// string-based serde.
macro_rules! fixed_barcode {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $len:literal) => {
        $(#[$meta])*
        ///
        /// Equality compares the original input string; two
        /// checksum-equivalent values with different formatting are not
        /// equal.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            raw: String,
            digits: String,
        }

        impl $name {
            /// Identifier type name used in error messages.
            pub const KIND: &'static str = $kind;
            /// Digit count including the check digit.
            pub const LENGTH: usize = $len;

            /// Parse and validate, keeping the original formatting for
            /// display.
            pub fn parse(raw: &str) -> Result<Self, $crate::barcode::InvalidBarcode> {
                let digits = $crate::barcode::strip_formatting(raw);
                if !$crate::barcode::has_valid_check_digit(&digits, Self::LENGTH) {
                    return Err($crate::barcode::InvalidBarcode::new(Self::KIND, raw));
                }
                Ok(Self {
                    raw: raw.to_owned(),
                    digits,
                })
            }

            /// The original input, formatting preserved.
            pub fn as_str(&self) -> &str {
                &self.raw
            }

            /// The normalized digit payload the checksum was computed
            /// over.
            pub fn digits(&self) -> &str {
                &self.digits
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.raw)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::barcode::InvalidBarcode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::barcode::InvalidBarcode;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.raw
            }
        }
    };
}

pub(crate) use fixed_barcode;

//! Measurement quantities with decimal unit conversion.
//!
//! Each quantity kind pairs a [`rust_decimal::Decimal`] magnitude with a
//! unit whose conversion factor to the kind's base unit is an exact
//! decimal constant. Conversions between metric units are exact;
//! customary factors (inch, pound, acre, gallon) are the exact legal
//! definitions, so conversion *to* them is precise up to `Decimal`'s
//! 28-digit range.
//!
//! Equality and ordering compare base-unit magnitudes, so
//! `1 m == 100 cm`. Comparisons never panic: a quantity whose base
//! magnitude leaves `Decimal`'s range compares by its sign, and two
//! same-signed out-of-range quantities are unordered.

mod area;
mod capacity;
mod count;
mod length;
mod mass;
mod volume;

pub use area::{Area, AreaUnit};
pub use capacity::{Capacity, CapacityUnit};
pub use count::{Count, CountUnit};
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use volume::{Volume, VolumeUnit};

/// Generates a quantity kind: a unit enum with exact factors to the base
/// unit, and an immutable `{ value, unit }` pair with conversion and
/// checked arithmetic.
macro_rules! quantity {
    (
        $(#[$qmeta:meta])*
        $quantity:ident, $unit:ident {
            $($(#[$vmeta:meta])* $variant:ident => ($factor:expr, $symbol:literal),)+
        }
    ) => {
        /// Units for the corresponding quantity, each carrying an exact
        /// decimal factor to the base unit.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $unit {
            $($(#[$vmeta])* $variant,)+
        }

        impl $unit {
            /// Conversion factor to the base unit.
            pub fn factor(self) -> ::rust_decimal::Decimal {
                match self {
                    $(Self::$variant => $factor,)+
                }
            }

            /// Unit symbol used by `Display`.
            pub fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }
        }

        $(#[$qmeta])*
        ///
        /// Equality and ordering compare base-unit magnitudes.
        #[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
        pub struct $quantity {
            value: ::rust_decimal::Decimal,
            unit: $unit,
        }

        impl $quantity {
            pub fn new(value: ::rust_decimal::Decimal, unit: $unit) -> Self {
                Self { value, unit }
            }

            pub fn value(&self) -> ::rust_decimal::Decimal {
                self.value
            }

            pub fn unit(&self) -> $unit {
                self.unit
            }

            /// Magnitude expressed in the base unit; `None` if it
            /// leaves `Decimal`'s range.
            pub fn base_value(&self) -> Option<::rust_decimal::Decimal> {
                self.value.checked_mul(self.unit.factor())
            }

            /// The same quantity expressed in `unit`; `None` if the
            /// conversion leaves `Decimal`'s range.
            pub fn to(&self, unit: $unit) -> Option<Self> {
                let value = self.base_value()?.checked_div(unit.factor())?;
                Some(Self { value, unit })
            }

            /// Add, converting the right-hand side into this value's
            /// unit. `None` on overflow.
            pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
                let value = self.value.checked_add(rhs.to(self.unit)?.value)?;
                Some(Self { value, unit: self.unit })
            }

            /// Subtract, converting the right-hand side into this
            /// value's unit. `None` on overflow.
            pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                let value = self.value.checked_sub(rhs.to(self.unit)?.value)?;
                Some(Self { value, unit: self.unit })
            }

            /// Ordering on base-unit magnitudes that cannot panic: a
            /// side whose base value leaves `Decimal`'s range compares
            /// by its sign, and two same-signed out-of-range values
            /// are unordered.
            fn base_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                use ::std::cmp::Ordering;
                match (self.base_value(), other.base_value()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b),
                    (None, Some(_)) => Some($crate::measure::sign_ordering(self.value)),
                    (Some(_), None) => {
                        Some($crate::measure::sign_ordering(other.value).reverse())
                    }
                    (None, None) => {
                        let (l, r) = (
                            self.value.is_sign_negative(),
                            other.value.is_sign_negative(),
                        );
                        (l != r).then(|| if l { Ordering::Less } else { Ordering::Greater })
                    }
                }
            }

            /// Scale by a dimensionless factor. `None` on overflow.
            pub fn checked_mul(&self, factor: ::rust_decimal::Decimal) -> Option<Self> {
                let value = self.value.checked_mul(factor)?;
                Some(Self { value, unit: self.unit })
            }

            pub fn is_zero(&self) -> bool {
                self.value.is_zero()
            }
        }

        impl PartialEq for $quantity {
            fn eq(&self, other: &Self) -> bool {
                self.base_cmp(other) == Some(::std::cmp::Ordering::Equal)
            }
        }

        impl PartialOrd for $quantity {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                self.base_cmp(other)
            }
        }

        impl ::std::fmt::Display for $quantity {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{} {}", self.value, self.unit.symbol())
            }
        }
    };
}

pub(crate) use quantity;

/// Sign of a base value that left `Decimal`'s range: the factor is
/// positive, so the magnitude's sign is the value's sign.
pub(crate) fn sign_ordering(value: rust_decimal::Decimal) -> std::cmp::Ordering {
    if value.is_sign_negative() {
        std::cmp::Ordering::Less
    } else {
        std::cmp::Ordering::Greater
    }
}

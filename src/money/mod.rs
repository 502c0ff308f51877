//! Monetary value objects.
//!
//! [`Currency`] carries ISO 4217 metadata from a static table;
//! [`Money`] pairs a [`rust_decimal::Decimal`] amount with a currency and
//! offers checked arithmetic that refuses to mix currencies.

mod currency;
mod error;
#[allow(clippy::module_inception)]
mod money;

pub use currency::Currency;
pub use error::MoneyError;
pub use money::Money;

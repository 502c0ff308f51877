use thiserror::Error;

/// Errors from currency lookup and money arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MoneyError {
    /// Currency code not present in the ISO 4217 table.
    #[error("unknown ISO 4217 currency code '{0}'")]
    UnknownCurrency(String),

    /// Arithmetic attempted across two different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// Division by a zero scalar.
    #[error("division by zero")]
    DivisionByZero,

    /// The operation exceeded `Decimal`'s representable range.
    #[error("amount overflow")]
    Overflow,

    /// Allocation ratios were empty or summed to zero.
    #[error("allocation ratios must be non-empty with a positive sum")]
    InvalidAllocation,

    /// String not in the form `"<amount> <CODE>"`.
    #[error("invalid money string '{0}'")]
    InvalidMoney(String),
}

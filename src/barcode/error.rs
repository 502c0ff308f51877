use thiserror::Error;

/// Error returned when a GS1 identifier fails validation.
///
/// Every failure cause — wrong length, non-numeric character, bad check
/// digit, and for GRAI a bad indicator digit or non-alphanumeric serial —
/// collapses into this one error. Callers treat any instance as "reject
/// the input"; no cause distinction is surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct InvalidBarcode {
    /// Identifier type name, e.g. "GTIN-13".
    pub kind: &'static str,
    /// The original input, formatting preserved.
    pub value: String,
}

impl InvalidBarcode {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

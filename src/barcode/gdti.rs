use crate::barcode::{InvalidBarcode, has_valid_check_digit, strip_formatting};

/// GDTI — Global Document Type Identifier: a 13-digit checksummed base
/// optionally followed by an alphanumeric serial, at most 30 characters
/// in total.
///
/// Equality compares the original input string; two checksum-equivalent
/// values with different formatting are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gdti {
    raw: String,
    normalized: String,
}

impl Gdti {
    /// Identifier type name used in error messages.
    pub const KIND: &'static str = "GDTI";
    /// Digit count of the checksummed base, including the check digit.
    pub const BASE_LENGTH: usize = 13;
    /// Maximum total length including the serial.
    pub const MAX_LENGTH: usize = 30;

    /// Parse and validate, keeping the original formatting for display.
    pub fn parse(raw: &str) -> Result<Self, InvalidBarcode> {
        let normalized = strip_formatting(raw);
        let err = || InvalidBarcode::new(Self::KIND, raw);
        if !normalized.is_ascii()
            || normalized.len() < Self::BASE_LENGTH
            || normalized.len() > Self::MAX_LENGTH
        {
            return Err(err());
        }
        let (base, serial) = normalized.split_at(Self::BASE_LENGTH);
        if !has_valid_check_digit(base, Self::BASE_LENGTH)
            || !serial.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(err());
        }
        Ok(Self {
            raw: raw.to_owned(),
            normalized,
        })
    }

    /// The original input, formatting preserved.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The normalized form: 13-digit base plus optional serial.
    pub fn digits(&self) -> &str {
        &self.normalized
    }

    /// The 13-digit checksummed base.
    pub fn base(&self) -> &str {
        &self.normalized[..Self::BASE_LENGTH]
    }

    /// The optional serial suffix.
    pub fn serial(&self) -> Option<&str> {
        let serial = &self.normalized[Self::BASE_LENGTH..];
        (!serial.is_empty()).then_some(serial)
    }
}

impl std::fmt::Display for Gdti {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Gdti {
    type Err = InvalidBarcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Gdti {
    type Error = InvalidBarcode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Gdti> for String {
    fn from(value: Gdti) -> String {
        value.raw
    }
}

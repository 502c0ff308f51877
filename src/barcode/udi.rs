use crate::barcode::{InvalidBarcode, has_valid_check_digit, strip_formatting};

/// UDI — Unique Device Identifier (device identifier part), carried as a
/// GTIN in any of the four standard digit counts.
///
/// Equality compares the original input string; two checksum-equivalent
/// values with different formatting are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Udi {
    raw: String,
    digits: String,
}

impl Udi {
    /// Identifier type name used in error messages.
    pub const KIND: &'static str = "UDI";
    /// Accepted digit counts (the GTIN family).
    pub const LENGTHS: [usize; 4] = [8, 12, 13, 14];

    /// Parse and validate, keeping the original formatting for display.
    pub fn parse(raw: &str) -> Result<Self, InvalidBarcode> {
        let digits = strip_formatting(raw);
        if !Self::LENGTHS.contains(&digits.len())
            || !has_valid_check_digit(&digits, digits.len())
        {
            return Err(InvalidBarcode::new(Self::KIND, raw));
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

    /// The normalized digit payload the checksum was computed over.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl std::fmt::Display for Udi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Udi {
    type Err = InvalidBarcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Udi {
    type Error = InvalidBarcode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Udi> for String {
    fn from(value: Udi) -> String {
        value.raw
    }
}

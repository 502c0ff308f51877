//! ISO 4217 currency lookup.
//!
//! Covers the currencies relevant to international trade documents; the
//! table records the minor-unit count used for rounding and allocation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::MoneyError;

/// An ISO 4217 currency with its minor-unit count.
///
/// Obtained via [`Currency::from_code`]; two currencies are equal iff
/// their codes are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    minor_units: u32,
    name: &'static str,
}

impl Currency {
    /// Look up a currency by its three-letter ISO 4217 code.
    ///
    /// The code is matched case-insensitively.
    pub fn from_code(code: &str) -> Result<Self, MoneyError> {
        let upper = code.trim().to_ascii_uppercase();
        match CURRENCIES.binary_search_by(|&(c, _, _)| c.cmp(upper.as_str())) {
            Ok(idx) => {
                let (code, minor_units, name) = CURRENCIES[idx];
                Ok(Self {
                    code,
                    minor_units,
                    name,
                })
            }
            Err(_) => Err(MoneyError::UnknownCurrency(code.into())),
        }
    }

    /// Three-letter ISO 4217 code, e.g. `"EUR"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Number of digits after the decimal point in the minor unit
    /// (2 for EUR, 0 for JPY, 3 for BHD).
    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }

    /// English currency name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code).map_err(serde::de::Error::custom)
    }
}

/// (code, minor units, English name). Sorted by code for binary search.
static CURRENCIES: &[(&str, u32, &str)] = &[
    ("AED", 2, "UAE Dirham"),
    ("AMD", 2, "Armenian Dram"),
    ("AUD", 2, "Australian Dollar"),
    ("BGN", 2, "Bulgarian Lev"),
    ("BHD", 3, "Bahraini Dinar"),
    ("BRL", 2, "Brazilian Real"),
    ("CAD", 2, "Canadian Dollar"),
    ("CHF", 2, "Swiss Franc"),
    ("CLP", 0, "Chilean Peso"),
    ("CNY", 2, "Chinese Yuan"),
    ("CZK", 2, "Czech Koruna"),
    ("DKK", 2, "Danish Krone"),
    ("EGP", 2, "Egyptian Pound"),
    ("EUR", 2, "Euro"),
    ("GBP", 2, "Pound Sterling"),
    ("GEL", 2, "Georgian Lari"),
    ("HKD", 2, "Hong Kong Dollar"),
    ("HUF", 2, "Hungarian Forint"),
    ("IDR", 2, "Indonesian Rupiah"),
    ("ILS", 2, "Israeli Shekel"),
    ("INR", 2, "Indian Rupee"),
    ("ISK", 0, "Icelandic Krona"),
    ("JOD", 3, "Jordanian Dinar"),
    ("JPY", 0, "Japanese Yen"),
    ("KES", 2, "Kenyan Shilling"),
    ("KRW", 0, "South Korean Won"),
    ("KWD", 3, "Kuwaiti Dinar"),
    ("KZT", 2, "Kazakhstani Tenge"),
    ("MXN", 2, "Mexican Peso"),
    ("MYR", 2, "Malaysian Ringgit"),
    ("NGN", 2, "Nigerian Naira"),
    ("NOK", 2, "Norwegian Krone"),
    ("NZD", 2, "New Zealand Dollar"),
    ("PHP", 2, "Philippine Peso"),
    ("PLN", 2, "Polish Zloty"),
    ("RON", 2, "Romanian Leu"),
    ("RUB", 2, "Russian Ruble"),
    ("SAR", 2, "Saudi Riyal"),
    ("SEK", 2, "Swedish Krona"),
    ("SGD", 2, "Singapore Dollar"),
    ("THB", 2, "Thai Baht"),
    ("TND", 3, "Tunisian Dinar"),
    ("TRY", 2, "Turkish Lira"),
    ("TWD", 2, "New Taiwan Dollar"),
    ("UAH", 2, "Ukrainian Hryvnia"),
    ("USD", 2, "US Dollar"),
    ("VND", 0, "Vietnamese Dong"),
    ("ZAR", 2, "South African Rand"),
];

//! ISO 3166-1 alpha-2 country codes.
//!
//! Full list of currently assigned codes; lookup is case-insensitive and
//! the stored value is the canonical uppercase form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RegionError;

/// A validated ISO 3166-1 alpha-2 country code, stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(&'static str);

impl CountryCode {
    /// Parse a two-letter country code, case-insensitively.
    pub fn parse(code: &str) -> Result<Self, RegionError> {
        let upper = code.trim().to_ascii_uppercase();
        match COUNTRY_CODES.binary_search(&upper.as_str()) {
            Ok(idx) => Ok(Self(COUNTRY_CODES[idx])),
            Err(_) => Err(RegionError::UnknownCountry(code.into())),
        }
    }

    /// The canonical uppercase code, e.g. `"DE"`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        CountryCode::parse(&code).map_err(serde::de::Error::custom)
    }
}

/// Complete list of ISO 3166-1 alpha-2 country codes (249 entries).
/// Sorted for binary search.
static COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries() {
        assert_eq!(CountryCode::parse("DE").unwrap().as_str(), "DE");
        assert!(CountryCode::parse("AT").is_ok());
        assert!(CountryCode::parse("US").is_ok());
        assert!(CountryCode::parse("JP").is_ok());
    }

    #[test]
    fn lowercase_input_normalized() {
        let de = CountryCode::parse("de").unwrap();
        assert_eq!(de.as_str(), "DE");
        assert_eq!(de, CountryCode::parse("DE").unwrap());
    }

    #[test]
    fn unknown_countries() {
        assert_eq!(
            CountryCode::parse("XX"),
            Err(RegionError::UnknownCountry("XX".into()))
        );
        assert!(CountryCode::parse("").is_err());
        assert!(CountryCode::parse("DEU").is_err());
    }

    #[test]
    fn list_is_sorted() {
        for window in COUNTRY_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "country codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn serde_as_string() {
        let de = CountryCode::parse("DE").unwrap();
        assert_eq!(serde_json::to_string(&de).unwrap(), "\"DE\"");
        let back: CountryCode = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(back, de);
        assert!(serde_json::from_str::<CountryCode>("\"XX\"").is_err());
    }
}

//! ISO 639-1 language codes.
//!
//! Full list of two-letter codes; lookup is case-insensitive and the
//! stored value is the canonical lowercase form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RegionError;

/// A validated ISO 639-1 language code, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    /// Parse a two-letter language code, case-insensitively.
    pub fn parse(code: &str) -> Result<Self, RegionError> {
        let lower = code.trim().to_ascii_lowercase();
        match LANGUAGE_CODES.binary_search(&lower.as_str()) {
            Ok(idx) => Ok(Self(LANGUAGE_CODES[idx])),
            Err(_) => Err(RegionError::UnknownLanguage(code.into())),
        }
    }

    /// The canonical lowercase code, e.g. `"de"`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        LanguageCode::parse(&code).map_err(serde::de::Error::custom)
    }
}

/// Complete list of ISO 639-1 language codes (184 entries).
/// Sorted for binary search.
static LANGUAGE_CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages() {
        assert_eq!(LanguageCode::parse("de").unwrap().as_str(), "de");
        assert!(LanguageCode::parse("en").is_ok());
        assert!(LanguageCode::parse("ja").is_ok());
        assert!(LanguageCode::parse("zh").is_ok());
    }

    #[test]
    fn uppercase_input_normalized() {
        let de = LanguageCode::parse("DE").unwrap();
        assert_eq!(de.as_str(), "de");
        assert_eq!(de, LanguageCode::parse("de").unwrap());
    }

    #[test]
    fn unknown_languages() {
        assert_eq!(
            LanguageCode::parse("xx"),
            Err(RegionError::UnknownLanguage("xx".into()))
        );
        assert!(LanguageCode::parse("").is_err());
        assert!(LanguageCode::parse("deu").is_err());
    }

    #[test]
    fn list_is_sorted() {
        for window in LANGUAGE_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "language codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }
}

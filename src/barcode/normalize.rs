//! Input normalization applied before checksum validation.

/// Separator characters tolerated in user input: ASCII hyphen and space
/// plus the Unicode hyphen (U+2010) and non-breaking hyphen (U+2011)
/// variants observed in scanned source data.
const SEPARATORS: [char; 4] = ['-', ' ', '\u{2010}', '\u{2011}'];

/// Remove formatting separators from `raw`.
///
/// Only the characters in [`SEPARATORS`] are removed; everything else —
/// including invalid characters — passes through unchanged so that the
/// checksum engine's non-numeric rule rejects them. The function is
/// idempotent. Display values keep the original formatting; only
/// validation sees the stripped form.
pub fn strip_formatting(raw: &str) -> String {
    raw.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hyphens_and_spaces() {
        assert_eq!(strip_formatting("4719-5127"), "47195127");
        assert_eq!(strip_formatting("4 006381 333931"), "4006381333931");
        assert_eq!(strip_formatting("47‐19‑5127"), "47195127");
    }

    #[test]
    fn passes_other_characters_through() {
        assert_eq!(strip_formatting("40x6381"), "40x6381");
        assert_eq!(strip_formatting("4006381–333931"), "4006381–333931");
    }

    #[test]
    fn idempotent() {
        let once = strip_formatting("4719-5127 ‑");
        assert_eq!(strip_formatting(&once), once);
    }

    #[test]
    fn empty_input() {
        assert_eq!(strip_formatting(""), "");
        assert_eq!(strip_formatting("- ‐‑"), "");
    }
}

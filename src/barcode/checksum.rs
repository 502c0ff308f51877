//! GS1 check digit computation — the mod-10 scheme with alternating
//! weights of 3 and 1, shared by GTIN, GLN, SSCC, GSRN, GDTI and GRAI.

/// Compute the GS1 check digit for a payload of bare ASCII digits.
///
/// The payload excludes the check digit itself. Weights alternate 3, 1,
/// 3, 1, … starting with 3 at the rightmost payload digit (the one
/// adjacent to the check digit).
///
/// Returns `None` when the payload is empty, contains a non-digit, or is
/// all zeros — an all-zero payload has no admissible check digit in this
/// scheme.
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }
    let mut sum = 0u32;
    let mut weight = 3u32;
    let mut all_zero = true;
    for b in payload.bytes().rev() {
        if !b.is_ascii_digit() {
            return None;
        }
        let digit = u32::from(b - b'0');
        if digit != 0 {
            all_zero = false;
        }
        sum += digit * weight;
        weight = 4 - weight;
    }
    if all_zero {
        return None;
    }
    Some(((10 - sum % 10) % 10) as u8)
}

/// Validate that `digits` is exactly `expected_len` ASCII digits ending in
/// a correct GS1 check digit.
///
/// Never errors: a wrong length, a non-digit character, an all-zero
/// string, or a check digit mismatch all return `false`. Callers fold
/// every failure cause into one uniform invalid-identifier error.
pub fn has_valid_check_digit(digits: &str, expected_len: usize) -> bool {
    if !digits.is_ascii() || digits.len() != expected_len || expected_len < 2 {
        return false;
    }
    let (payload, check) = digits.split_at(digits.len() - 1);
    let Some(expected) = check_digit(payload) else {
        return false;
    };
    check.as_bytes()[0].checked_sub(b'0') == Some(expected)
}

use super::fixed_barcode;

fixed_barcode!(
    /// GLN — Global Location Number, a 13-digit GS1 identifier for
    /// parties and physical locations.
    Gln,
    "GLN",
    13
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_gln() {
        let gln = Gln::parse("0614141000012").unwrap();
        assert_eq!(gln.as_str(), "0614141000012");
    }

    #[test]
    fn all_zero_gln_rejected() {
        // 13 zeros would satisfy the bare mod-10 formula; the engine
        // still rejects it
        let err = Gln::parse("0000000000000").unwrap_err();
        assert_eq!(err.kind, "GLN");
    }

    #[test]
    fn bad_check_digit_rejected() {
        assert!(Gln::parse("0614141000013").is_err());
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = werte::barcode::Gtin8::parse(s);
        let _ = werte::barcode::Gtin13::parse(s);
        let _ = werte::barcode::Sscc::parse(s);
        let _ = werte::barcode::Gdti::parse(s);
        let _ = werte::barcode::Grai::parse(s);
        let _ = werte::barcode::Udi::parse(s);
        let _ = werte::barcode::has_valid_check_digit(s, s.len());
        let _ = werte::barcode::strip_formatting(s);
    }
});

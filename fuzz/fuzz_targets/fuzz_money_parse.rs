#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = s.parse::<werte::money::Money>();
        let _ = werte::money::Currency::from_code(s);
        let _ = s.parse::<werte::geo::Coordinates>();
        let _ = werte::region::CountryCode::parse(s);
        let _ = werte::region::LanguageCode::parse(s);
    }
});

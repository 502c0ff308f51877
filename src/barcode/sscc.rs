use super::fixed_barcode;

fixed_barcode!(
    /// SSCC — Serial Shipping Container Code, the 18-digit GS1
    /// identifier for logistics units.
    Sscc,
    "SSCC",
    18
);

//! Global Trade Item Numbers in their four standard digit counts.

use super::fixed_barcode;

fixed_barcode!(
    /// GTIN-8 — the short form used on small packages (EAN-8).
    Gtin8,
    "GTIN-8",
    8
);

fixed_barcode!(
    /// GTIN-12 — the UPC-A trade item number.
    Gtin12,
    "GTIN-12",
    12
);

fixed_barcode!(
    /// GTIN-13 — the EAN-13 trade item number, the most common retail
    /// barcode.
    Gtin13,
    "GTIN-13",
    13
);

fixed_barcode!(
    /// GTIN-14 — the logistics-level trade item number with a packaging
    /// indicator digit.
    Gtin14,
    "GTIN-14",
    14
);

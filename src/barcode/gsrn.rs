use super::fixed_barcode;

fixed_barcode!(
    /// GSRN — Global Service Relation Number, an 18-digit GS1 identifier
    /// for service relationships.
    Gsrn,
    "GSRN",
    18
);

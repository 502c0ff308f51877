use rust_decimal_macros::dec;

use super::quantity;

quantity!(
    /// A dimensionless count of items; base unit a single unit.
    Count, CountUnit {
        Unit => (dec!(1), "unit"),
        Pair => (dec!(2), "pair"),
        Dozen => (dec!(12), "dozen"),
        /// Twelve dozen.
        Gross => (dec!(144), "gross"),
    }
);

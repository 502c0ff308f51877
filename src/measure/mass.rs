use rust_decimal_macros::dec;

use super::quantity;

quantity!(
    /// A mass; base unit kilogram.
    Mass, MassUnit {
        Milligram => (dec!(0.000001), "mg"),
        Gram => (dec!(0.001), "g"),
        Kilogram => (dec!(1), "kg"),
        /// Metric tonne.
        Tonne => (dec!(1000), "t"),
        /// International avoirdupois ounce, 28.349523125 g exactly.
        Ounce => (dec!(0.028349523125), "oz"),
        /// International avoirdupois pound, 453.59237 g exactly.
        Pound => (dec!(0.45359237), "lb"),
    }
);

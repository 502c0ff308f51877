use rust_decimal_macros::dec;

use super::quantity;

quantity!(
    /// A liquid capacity; base unit litre.
    Capacity, CapacityUnit {
        Millilitre => (dec!(0.001), "ml"),
        Centilitre => (dec!(0.01), "cl"),
        Decilitre => (dec!(0.1), "dl"),
        Litre => (dec!(1), "l"),
        Hectolitre => (dec!(100), "hl"),
        /// US liquid pint, 0.473176473 l exactly.
        Pint => (dec!(0.473176473), "pt"),
        /// US liquid gallon, 3.785411784 l exactly.
        Gallon => (dec!(3.785411784), "gal"),
    }
);

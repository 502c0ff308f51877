use rust_decimal_macros::dec;

use super::quantity;

quantity!(
    /// An area; base unit square metre.
    Area, AreaUnit {
        SquareMillimetre => (dec!(0.000001), "mm²"),
        SquareCentimetre => (dec!(0.0001), "cm²"),
        SquareMetre => (dec!(1), "m²"),
        Hectare => (dec!(10000), "ha"),
        SquareKilometre => (dec!(1000000), "km²"),
        /// 0.3048² m² exactly.
        SquareFoot => (dec!(0.09290304), "ft²"),
        /// International acre, 4046.8564224 m² exactly.
        Acre => (dec!(4046.8564224), "ac"),
    }
);

use rust_decimal_macros::dec;

use super::quantity;

quantity!(
    /// A volume; base unit cubic metre.
    Volume, VolumeUnit {
        CubicCentimetre => (dec!(0.000001), "cm³"),
        CubicDecimetre => (dec!(0.001), "dm³"),
        CubicMetre => (dec!(1), "m³"),
        /// 0.0254³ m³ exactly.
        CubicInch => (dec!(0.000016387064), "in³"),
        /// 0.3048³ m³ exactly.
        CubicFoot => (dec!(0.028316846592), "ft³"),
    }
);

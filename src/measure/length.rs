use rust_decimal_macros::dec;

use super::quantity;

quantity!(
    /// A length; base unit metre.
    Length, LengthUnit {
        Millimetre => (dec!(0.001), "mm"),
        Centimetre => (dec!(0.01), "cm"),
        Decimetre => (dec!(0.1), "dm"),
        Metre => (dec!(1), "m"),
        Kilometre => (dec!(1000), "km"),
        /// International inch, 25.4 mm exactly.
        Inch => (dec!(0.0254), "in"),
        Foot => (dec!(0.3048), "ft"),
        Yard => (dec!(0.9144), "yd"),
        /// Statute mile, 1609.344 m exactly.
        Mile => (dec!(1609.344), "mi"),
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_conversion_is_exact() {
        let m = Length::new(dec!(1.5), LengthUnit::Metre);
        assert_eq!(m.to(LengthUnit::Centimetre).unwrap().value(), dec!(150));
        assert_eq!(m.to(LengthUnit::Kilometre).unwrap().value(), dec!(0.0015));
        assert_eq!(m.to(LengthUnit::Millimetre).unwrap().value(), dec!(1500));
    }

    #[test]
    fn equality_across_units() {
        assert_eq!(
            Length::new(dec!(1), LengthUnit::Metre),
            Length::new(dec!(100), LengthUnit::Centimetre)
        );
        assert!(
            Length::new(dec!(1), LengthUnit::Mile) > Length::new(dec!(1), LengthUnit::Kilometre)
        );
    }

    #[test]
    fn customary_factors() {
        let foot = Length::new(dec!(1), LengthUnit::Foot);
        assert_eq!(foot.to(LengthUnit::Inch).unwrap().value(), dec!(12));
        assert_eq!(foot.base_value(), Some(dec!(0.3048)));
        let mile = Length::new(dec!(1), LengthUnit::Mile);
        assert_eq!(mile.to(LengthUnit::Yard).unwrap().value(), dec!(1760));
    }

    #[test]
    fn mixed_unit_addition() {
        let sum = Length::new(dec!(1), LengthUnit::Metre)
            .checked_add(&Length::new(dec!(50), LengthUnit::Centimetre))
            .unwrap();
        assert_eq!(sum.value(), dec!(1.5));
        assert_eq!(sum.unit(), LengthUnit::Metre);
    }

    #[test]
    fn oversized_values_convert_and_compare_without_panicking() {
        use rust_decimal::Decimal;

        let huge = Length::new(Decimal::MAX, LengthUnit::Kilometre);
        let small = Length::new(dec!(1), LengthUnit::Metre);
        assert_ne!(huge, small);
        assert!(huge > small);
        assert!(Length::new(Decimal::MIN, LengthUnit::Kilometre) < small);
        assert_eq!(huge.to(LengthUnit::Millimetre), None);
        assert_eq!(huge.base_value(), None);
        assert_eq!(huge.checked_add(&small), None);
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(
            Length::new(dec!(2.5), LengthUnit::Kilometre).to_string(),
            "2.5 km"
        );
    }
}

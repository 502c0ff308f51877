use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{Currency, MoneyError};

/// An immutable monetary amount in a single currency.
///
/// Arithmetic is checked: mixing currencies or overflowing `Decimal`'s
/// range returns an error rather than panicking. Rounding to the
/// currency's minor unit uses banker's rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// A money value of `amount` in `currency`, kept at full precision.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// A money value from an integer count of minor units
    /// (`from_minor_units(1999, eur)` is 19.99 EUR).
    pub fn from_minor_units(minor: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(minor, currency.minor_units()),
            currency,
        }
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    fn require_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.code(),
                right: other.currency.code(),
            });
        }
        Ok(())
    }

    /// Add two amounts of the same currency.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Subtract an amount of the same currency.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Multiply by a scalar factor.
    pub fn checked_mul(&self, factor: Decimal) -> Result<Self, MoneyError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Divide by a non-zero scalar.
    pub fn checked_div(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Round to the currency's minor units with banker's rounding.
    pub fn round(&self) -> Self {
        Self::new(
            self.amount.round_dp_with_strategy(
                self.currency.minor_units(),
                RoundingStrategy::MidpointNearestEven,
            ),
            self.currency,
        )
    }

    /// Split the amount (rounded to minor units) into shares proportional
    /// to `ratios`, without losing or inventing a minor unit.
    ///
    /// Integer division leaves a remainder of at most `ratios.len() - 1`
    /// minor units; these are handed out one per share from the front, so
    /// the shares sum exactly to the rounded total.
    pub fn allocate(&self, ratios: &[u32]) -> Result<Vec<Self>, MoneyError> {
        let weight_sum: u64 = ratios.iter().map(|&r| u64::from(r)).sum();
        if ratios.is_empty() || weight_sum == 0 {
            return Err(MoneyError::InvalidAllocation);
        }
        let scale = self.currency.minor_units();
        let factor = Decimal::from(10u64.pow(scale));
        let total_minor = self
            .round()
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?
            .trunc()
            .to_i128()
            .ok_or(MoneyError::Overflow)?;

        let negative = total_minor < 0;
        let magnitude = total_minor.unsigned_abs();
        let mut shares: Vec<u128> = ratios
            .iter()
            .map(|&r| magnitude * u128::from(r) / u128::from(weight_sum))
            .collect();
        let mut remainder = magnitude - shares.iter().sum::<u128>();
        for share in shares.iter_mut() {
            if remainder == 0 {
                break;
            }
            *share += 1;
            remainder -= 1;
        }

        Ok(shares
            .into_iter()
            .map(|share| {
                let minor = if negative {
                    -(share as i128)
                } else {
                    share as i128
                };
                Self::new(Decimal::from_i128_with_scale(minor, scale), self.currency)
            })
            .collect())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    /// Parse the `"<amount> <CODE>"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, code) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| MoneyError::InvalidMoney(s.into()))?;
        let amount = amount
            .parse::<Decimal>()
            .map_err(|_| MoneyError::InvalidMoney(s.into()))?;
        Ok(Self::new(amount, Currency::from_code(code)?))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn eur() -> Currency {
        Currency::from_code("EUR").unwrap()
    }

    fn usd() -> Currency {
        Currency::from_code("USD").unwrap()
    }

    #[test]
    fn minor_unit_construction() {
        let m = Money::from_minor_units(1999, eur());
        assert_eq!(m.amount(), dec!(19.99));
        let yen = Money::from_minor_units(500, Currency::from_code("JPY").unwrap());
        assert_eq!(yen.amount(), dec!(500));
    }

    #[test]
    fn addition_same_currency() {
        let a = Money::new(dec!(10.50), eur());
        let b = Money::new(dec!(4.50), eur());
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(15.00));
        assert_eq!(a.checked_sub(&b).unwrap().amount(), dec!(6.00));
    }

    #[test]
    fn currency_mismatch() {
        let a = Money::new(dec!(10), eur());
        let b = Money::new(dec!(10), usd());
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch {
                left: "EUR",
                right: "USD"
            })
        );
    }

    #[test]
    fn scalar_mul_div() {
        let m = Money::new(dec!(19.99), eur());
        assert_eq!(m.checked_mul(dec!(3)).unwrap().amount(), dec!(59.97));
        assert_eq!(
            Money::new(dec!(10), eur())
                .checked_div(dec!(4))
                .unwrap()
                .amount(),
            dec!(2.5)
        );
        assert_eq!(
            m.checked_div(Decimal::ZERO),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn bankers_rounding() {
        assert_eq!(Money::new(dec!(2.675), eur()).round().amount(), dec!(2.68));
        assert_eq!(Money::new(dec!(2.665), eur()).round().amount(), dec!(2.66));
        assert_eq!(Money::new(dec!(2.685), eur()).round().amount(), dec!(2.68));
    }

    #[test]
    fn allocation_conserves_total() {
        let m = Money::new(dec!(100.00), eur());
        let shares = m.allocate(&[1, 1, 1]).unwrap();
        let amounts: Vec<Decimal> = shares.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    }

    #[test]
    fn allocation_by_weights() {
        let m = Money::new(dec!(5.00), eur());
        let shares = m.allocate(&[3, 7]).unwrap();
        assert_eq!(shares[0].amount(), dec!(1.50));
        assert_eq!(shares[1].amount(), dec!(3.50));
    }

    #[test]
    fn allocation_of_negative_amount() {
        let m = Money::new(dec!(-0.05), eur());
        let shares = m.allocate(&[1, 1]).unwrap();
        let total = shares[0].checked_add(&shares[1]).unwrap();
        assert_eq!(total.amount(), dec!(-0.05));
    }

    #[test]
    fn allocation_overflow_returns_error() {
        // amounts Money::new accepts must never panic inside allocate
        let m = Money::new(Decimal::MAX, eur());
        assert_eq!(m.allocate(&[1, 1]), Err(MoneyError::Overflow));
    }

    #[test]
    fn allocation_invalid_ratios() {
        let m = Money::new(dec!(1), eur());
        assert_eq!(m.allocate(&[]), Err(MoneyError::InvalidAllocation));
        assert_eq!(m.allocate(&[0, 0]), Err(MoneyError::InvalidAllocation));
    }

    #[test]
    fn display_and_parse_round_trip() {
        let m = Money::new(dec!(19.99), eur());
        assert_eq!(m.to_string(), "19.99 EUR");
        assert_eq!("19.99 EUR".parse::<Money>().unwrap(), m);
        assert!("19.99".parse::<Money>().is_err());
        assert!("abc EUR".parse::<Money>().is_err());
        assert!("19.99 XYZ".parse::<Money>().is_err());
    }

    #[test]
    fn sign_predicates() {
        assert!(Money::new(dec!(-1), eur()).is_negative());
        assert!(Money::new(dec!(1), eur()).is_positive());
        assert!(Money::zero(eur()).is_zero());
        assert!(!Money::zero(eur()).is_negative());
    }
}

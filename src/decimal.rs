use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// fractional digits carried by every emitted monetary figure
pub const CENTS_DP: u32 = 2;

/// Money type backed by a full precision decimal.
///
/// Arithmetic never rounds; rounding to cents happens only through
/// [`Money::round_to_cents`], which the schedule applies once per emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str_exact(s)?))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round half away from zero to exactly two fractional digits.
    ///
    /// The result always carries scale 2, so `0` renders as `0.00`, and a
    /// value that rounds to zero never keeps a negative sign.
    pub fn round_to_cents(&self) -> Self {
        let rounded = self
            .0
            .round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            return Money(Decimal::new(0, CENTS_DP));
        }
        let mut fixed = rounded;
        fixed.rescale(CENTS_DP);
        Money(fixed)
    }

    /// fixed-point rendering with exactly two fractional digits
    pub fn to_fixed(&self) -> String {
        self.round_to_cents().0.to_string()
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// check if strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// interest for one period at the given periodic rate
    pub fn interest_at(&self, rate: Rate) -> Self {
        Money(self.0 * rate.as_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(self.0 / other)
    }
}

/// rate type for interest rates, percentages, and ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 2.7 for 2.7%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_keeps_full_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        let doubled = m + m;
        assert_eq!(doubled.to_string(), "200.246913578");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(Money::from_decimal(dec!(403.34625)).to_fixed(), "403.35");
        assert_eq!(Money::from_decimal(dec!(0.005)).to_fixed(), "0.01");
        assert_eq!(Money::from_decimal(dec!(-0.005)).to_fixed(), "-0.01");
        assert_eq!(Money::from_decimal(dec!(12)).to_fixed(), "12.00");
        assert_eq!(Money::ZERO.to_fixed(), "0.00");
    }

    #[test]
    fn test_tiny_negative_rounds_to_unsigned_zero() {
        let residue = Money::from_decimal(dec!(-0.000000001));
        assert_eq!(residue.to_fixed(), "0.00");
    }

    #[test]
    fn test_monthly_rate_from_annual_percentage() {
        let annual = Rate::from_percentage(dec!(2.7));
        assert_eq!(annual.as_decimal(), dec!(0.027));
        assert_eq!(annual.monthly_rate().as_decimal(), dec!(0.00225));
        assert_eq!(annual.as_percentage(), dec!(2.7));
    }

    #[test]
    fn test_interest_at() {
        let balance = Money::from_major(179_265);
        let rate = Rate::from_decimal(dec!(0.00225));
        assert_eq!(balance.interest_at(rate).to_fixed(), "403.35");
    }
}

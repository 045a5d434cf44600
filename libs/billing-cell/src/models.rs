// libs/billing-cell/src/models.rs
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==============================================================================
// MONEY VALUE TYPE
// ==============================================================================

/// An exact, non-negative monetary amount.
///
/// Backed by `rust_decimal::Decimal`; consultation fees and revenue shares
/// must never pass through binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, BillingError> {
        if amount.is_sign_negative() {
            return Err(BillingError::InvalidAmount(format!(
                "amount must not be negative: {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    /// Whole-currency-unit constructor; unsigned input cannot violate the
    /// non-negative invariant.
    pub fn from_major(units: u32) -> Self {
        Money(Decimal::from(units))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtraction that refuses to go below zero.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        let diff = self.0 - other.0;
        if diff.is_sign_negative() {
            None
        } else {
            Some(Money(diff))
        }
    }
}

impl TryFrom<Decimal> for Money {
    type Error = BillingError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

// ==============================================================================
// REVENUE SPLIT POLICY
// ==============================================================================

/// Percentage split between the servicing clinic and the platform operator.
///
/// The two percentages must be non-negative and sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueSplitPolicy {
    pub clinic_share_percent: Decimal,
    pub platform_fee_percent: Decimal,
}

impl RevenueSplitPolicy {
    pub fn new(
        clinic_share_percent: Decimal,
        platform_fee_percent: Decimal,
    ) -> Result<Self, BillingError> {
        let policy = Self {
            clinic_share_percent,
            platform_fee_percent,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), BillingError> {
        if self.clinic_share_percent.is_sign_negative()
            || self.platform_fee_percent.is_sign_negative()
        {
            return Err(BillingError::InvalidPolicy(format!(
                "percentages must not be negative: {} / {}",
                self.clinic_share_percent, self.platform_fee_percent
            )));
        }
        if self.clinic_share_percent + self.platform_fee_percent != Decimal::ONE_HUNDRED {
            return Err(BillingError::InvalidPolicy(format!(
                "percentages must sum to 100, got {} + {}",
                self.clinic_share_percent, self.platform_fee_percent
            )));
        }
        Ok(())
    }
}

impl Default for RevenueSplitPolicy {
    /// The platform's standard 95/5 split.
    fn default() -> Self {
        Self {
            clinic_share_percent: Decimal::from(95),
            platform_fee_percent: Decimal::from(5),
        }
    }
}

/// Result of splitting one fee (or one aggregated gross revenue).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueSplit {
    pub clinic_share: Money,
    pub platform_fee: Money,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum BillingError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid revenue split policy: {0}")]
    InvalidPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_rejects_negative() {
        assert!(Money::new(dec!(-0.01)).is_err());
        assert!(Money::new(dec!(0)).is_ok());
    }

    #[test]
    fn test_money_sum_is_exact() {
        let fees = vec![
            Money::new(dec!(45)).unwrap(),
            Money::new(dec!(38)).unwrap(),
            Money::new(dec!(52)).unwrap(),
        ];
        let total: Money = fees.iter().sum();
        assert_eq!(total.amount(), dec!(135));
    }

    #[test]
    fn test_money_display() {
        let fee = Money::new(dec!(142.5)).unwrap();
        assert_eq!(fee.to_string(), "$142.50");
    }

    #[test]
    fn test_checked_sub_refuses_negative() {
        let a = Money::new(dec!(5)).unwrap();
        let b = Money::new(dec!(7.5)).unwrap();
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a).unwrap().amount(), dec!(2.5));
    }

    #[test]
    fn test_policy_must_sum_to_100() {
        assert!(RevenueSplitPolicy::new(dec!(95), dec!(5)).is_ok());
        assert!(RevenueSplitPolicy::new(dec!(90), dec!(5)).is_err());
        assert!(RevenueSplitPolicy::new(dec!(105), dec!(-5)).is_err());
    }

    #[test]
    fn test_default_policy_is_95_5() {
        let policy = RevenueSplitPolicy::default();
        assert_eq!(policy.clinic_share_percent, dec!(95));
        assert_eq!(policy.platform_fee_percent, dec!(5));
        assert!(policy.validate().is_ok());
    }
}

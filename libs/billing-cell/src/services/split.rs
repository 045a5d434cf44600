use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BillingError, Money, RevenueSplit, RevenueSplitPolicy};

/// Split a consultation fee between the servicing clinic and the platform.
///
/// The platform fee is truncated to the smallest currency unit (no rounding
/// up, no banker's rounding); the clinic share is the remainder of the fee,
/// so `clinic_share + platform_fee == fee` holds exactly for every input.
pub fn compute_split(fee: Money, policy: &RevenueSplitPolicy) -> Result<RevenueSplit, BillingError> {
    policy.validate()?;

    let raw_fee = fee.amount() * policy.platform_fee_percent / Decimal::ONE_HUNDRED;
    let mut truncated = raw_fee.trunc_with_scale(2);
    truncated.rescale(2);
    let platform_fee = Money::new(truncated)?;

    // Derived from the fee rather than computed independently; any
    // truncation remainder stays with the clinic.
    let clinic_share = fee.checked_sub(platform_fee).ok_or_else(|| {
        BillingError::InvalidAmount(format!(
            "platform fee {} exceeds consultation fee {}",
            platform_fee, fee
        ))
    })?;

    debug!(
        "Computed split for {}: clinic {} / platform {}",
        fee, clinic_share, platform_fee
    );

    Ok(RevenueSplit {
        clinic_share,
        platform_fee,
    })
}

/// Revenue split calculator bound to the platform's configured policy.
pub struct RevenueSplitService {
    policy: RevenueSplitPolicy,
}

impl RevenueSplitService {
    pub fn new(policy: RevenueSplitPolicy) -> Result<Self, BillingError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &RevenueSplitPolicy {
        &self.policy
    }

    pub fn split(&self, fee: Money) -> Result<RevenueSplit, BillingError> {
        compute_split(fee, &self.policy)
    }
}

impl Default for RevenueSplitService {
    fn default() -> Self {
        Self {
            policy: RevenueSplitPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(amount: Decimal) -> Money {
        Money::new(amount).unwrap()
    }

    #[test]
    fn test_standard_split_150() {
        let split = compute_split(money(dec!(150)), &RevenueSplitPolicy::default()).unwrap();
        assert_eq!(split.clinic_share.amount(), dec!(142.50));
        assert_eq!(split.platform_fee.amount(), dec!(7.50));
    }

    #[test]
    fn test_standard_split_100() {
        let split = compute_split(money(dec!(100)), &RevenueSplitPolicy::default()).unwrap();
        assert_eq!(split.clinic_share.amount(), dec!(95.00));
        assert_eq!(split.platform_fee.amount(), dec!(5.00));
    }

    #[test]
    fn test_truncation_remainder_goes_to_clinic() {
        // 5% of $0.99 is $0.0495; the platform keeps $0.04, the clinic the rest.
        let split = compute_split(money(dec!(0.99)), &RevenueSplitPolicy::default()).unwrap();
        assert_eq!(split.platform_fee.amount(), dec!(0.04));
        assert_eq!(split.clinic_share.amount(), dec!(0.95));
    }

    #[test]
    fn test_exact_sum_invariant() {
        let policy = RevenueSplitPolicy::default();
        for cents in [0u32, 1, 99, 101, 4999, 12_345, 15_000, 18_000, 999_999] {
            let fee = money(Decimal::new(cents as i64, 2));
            let split = compute_split(fee, &policy).unwrap();
            assert_eq!(
                (split.clinic_share + split.platform_fee).amount(),
                fee.amount(),
                "sum invariant violated for fee {}",
                fee
            );
        }
    }

    #[test]
    fn test_split_is_deterministic() {
        let policy = RevenueSplitPolicy::default();
        let fee = money(dec!(123.45));
        let first = compute_split(fee, &policy).unwrap();
        let second = compute_split(fee, &policy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_fee_splits_to_zero() {
        let split = compute_split(Money::ZERO, &RevenueSplitPolicy::default()).unwrap();
        assert_eq!(split.clinic_share, Money::ZERO);
        assert_eq!(split.platform_fee, Money::ZERO);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let policy = RevenueSplitPolicy {
            clinic_share_percent: dec!(90),
            platform_fee_percent: dec!(5),
        };
        let result = compute_split(money(dec!(100)), &policy);
        assert!(matches!(result, Err(BillingError::InvalidPolicy(_))));
    }

    #[test]
    fn test_service_uses_configured_policy() {
        let service = RevenueSplitService::default();
        let split = service.split(money(dec!(150))).unwrap();
        assert_eq!(split.clinic_share.amount(), dec!(142.50));
        assert_eq!(split.platform_fee.amount(), dec!(7.50));
    }
}

//! Comedy Calculator

use crate::{
    calculators::CalculatorError,
    invoices::Performance,
    plays::Play,
    pricing::{PricingPolicy, over_threshold},
};

/// Prices a comedy.
///
/// A comedy pays a flat charge, a surcharge plus per-person charge above the capacity threshold,
/// and a per-attendee charge on the whole audience. Comedies also earn bonus volume credits.
#[derive(Debug, Clone, Copy)]
pub struct ComedyCalculator<'a> {
    performance: &'a Performance,
    play: &'a Play,
    policy: &'a PricingPolicy,
}

impl<'a> ComedyCalculator<'a> {
    /// Create a new comedy calculator.
    pub fn new(performance: &'a Performance, play: &'a Play, policy: &'a PricingPolicy) -> Self {
        Self {
            performance,
            play,
            policy,
        }
    }

    /// Return the performance.
    pub fn performance(&self) -> &'a Performance {
        self.performance
    }

    /// Return the play.
    pub fn play(&self) -> &'a Play {
        self.play
    }

    /// Return the pricing policy.
    pub fn policy(&self) -> &'a PricingPolicy {
        self.policy
    }

    /// Charge in cents.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::AmountOverflow`] if the charge does not fit in an `i64`.
    pub fn amount(&self) -> Result<i64, CalculatorError> {
        let audience = self.performance.audience;
        let over = over_threshold(audience, self.policy.comedy_audience_threshold);

        let mut amount = Some(self.policy.comedy_base_amount);

        if over > 0 {
            amount = amount
                .and_then(|amount| amount.checked_add(self.policy.comedy_over_base_capacity_amount))
                .zip(
                    self.policy
                        .comedy_over_base_capacity_per_person
                        .checked_mul(i64::from(over)),
                )
                .and_then(|(amount, overage)| amount.checked_add(overage));
        }

        amount
            .zip(
                self.policy
                    .comedy_amount_per_audience
                    .checked_mul(i64::from(audience)),
            )
            .and_then(|(amount, per_audience)| amount.checked_add(per_audience))
            .ok_or_else(|| CalculatorError::AmountOverflow(self.play.name.clone()))
    }

    /// One bonus credit per [`PricingPolicy::comedy_extra_volume_factor`] attendees, rounded down.
    pub fn extra_volume_credits(&self) -> u64 {
        u64::from(self.performance.audience / self.policy.comedy_extra_volume_factor)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn calculate(audience: u32) -> Result<(i64, u64), CalculatorError> {
        let performance = Performance::new("as-like", audience);
        let play = Play::new("As You Like It", "comedy");
        let policy = PricingPolicy::default();
        let calculator = ComedyCalculator::new(&performance, &play, &policy);

        Ok((calculator.amount()?, calculator.extra_volume_credits()))
    }

    #[test]
    fn audience_over_threshold_pays_surcharge() -> TestResult {
        // 30000 + 10000 + 500 * 35 + 300 * 55
        assert_eq!(calculate(55)?.0, 74_000);

        Ok(())
    }

    #[test]
    fn audience_at_threshold_pays_only_per_audience_charge() -> TestResult {
        assert_eq!(calculate(20)?.0, 30_000 + 300 * 20);

        Ok(())
    }

    #[test]
    fn per_audience_charge_always_applies() -> TestResult {
        for audience in 0..=20 {
            assert_eq!(calculate(audience)?.0, 30_000 + 300 * i64::from(audience));
        }

        Ok(())
    }

    #[test]
    fn empty_audience_pays_base_amount() {
        assert_eq!(calculate(0), Ok((30_000, 0)));
    }

    #[test]
    fn bonus_credits_round_down() -> TestResult {
        assert_eq!(calculate(4)?.1, 0);
        assert_eq!(calculate(5)?.1, 1);
        assert_eq!(calculate(35)?.1, 7);
        assert_eq!(calculate(39)?.1, 7);

        Ok(())
    }

    #[test]
    fn per_audience_overflow_is_an_error() {
        let performance = Performance::new("as-like", u32::MAX);
        let play = Play::new("As You Like It", "comedy");
        let policy = PricingPolicy {
            comedy_amount_per_audience: i64::MAX / 2,
            ..PricingPolicy::default()
        };

        assert_eq!(
            ComedyCalculator::new(&performance, &play, &policy).amount(),
            Err(CalculatorError::AmountOverflow("As You Like It".to_string()))
        );
    }

    #[test]
    fn surcharge_overflow_is_an_error() {
        let performance = Performance::new("as-like", 21);
        let play = Play::new("As You Like It", "comedy");
        let policy = PricingPolicy {
            comedy_over_base_capacity_amount: i64::MAX,
            ..PricingPolicy::default()
        };

        assert!(matches!(
            ComedyCalculator::new(&performance, &play, &policy).amount(),
            Err(CalculatorError::AmountOverflow(_))
        ));
    }
}

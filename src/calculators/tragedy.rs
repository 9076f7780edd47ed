//! Tragedy Calculator

use crate::{
    calculators::CalculatorError,
    invoices::Performance,
    plays::Play,
    pricing::{PricingPolicy, over_threshold},
};

/// Prices a tragedy: a flat charge plus a per-person charge above the capacity threshold.
#[derive(Debug, Clone, Copy)]
pub struct TragedyCalculator<'a> {
    performance: &'a Performance,
    play: &'a Play,
    policy: &'a PricingPolicy,
}

impl<'a> TragedyCalculator<'a> {
    /// Create a new tragedy calculator.
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
        let over = over_threshold(
            self.performance.audience,
            self.policy.tragedy_audience_threshold,
        );

        let mut amount = self.policy.tragedy_base_amount;

        if over > 0 {
            amount = self
                .policy
                .tragedy_over_base_capacity_per_person
                .checked_mul(i64::from(over))
                .and_then(|overage| amount.checked_add(overage))
                .ok_or_else(|| CalculatorError::AmountOverflow(self.play.name.clone()))?;
        }

        Ok(amount)
    }

    /// Tragedies earn no bonus credits.
    pub fn extra_volume_credits(&self) -> u64 {
        0
    }
}

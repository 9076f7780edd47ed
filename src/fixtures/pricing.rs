//! Pricing Fixtures

use std::num::NonZeroU32;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;

use crate::{fixtures::FixtureError, money::PERCENT_FACTOR, pricing::PricingPolicy};

/// Pricing overrides in YAML.
///
/// Money fields are decimal dollar strings (e.g. `"400.00"`); thresholds are attendee counts.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingFixture {
    /// Audience size above which volume credits are earned
    pub base_volume_credit_threshold: Option<u32>,

    /// Flat tragedy charge
    pub tragedy_base_amount: Option<String>,

    /// Audience included in the flat tragedy charge
    pub tragedy_audience_threshold: Option<u32>,

    /// Tragedy charge per attendee over the threshold
    pub tragedy_over_base_capacity_per_person: Option<String>,

    /// Flat comedy charge
    pub comedy_base_amount: Option<String>,

    /// Audience included in the flat comedy charge
    pub comedy_audience_threshold: Option<u32>,

    /// Comedy surcharge over the threshold
    pub comedy_over_base_capacity_amount: Option<String>,

    /// Comedy charge per attendee over the threshold
    pub comedy_over_base_capacity_per_person: Option<String>,

    /// Comedy charge per attendee
    pub comedy_amount_per_audience: Option<String>,

    /// Attendees per bonus comedy credit
    pub comedy_extra_volume_factor: Option<NonZeroU32>,
}

impl PricingFixture {
    /// Override the fields of `policy` that this fixture sets.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidAmount`] if a money field is not a valid amount.
    pub fn apply_to(self, policy: PricingPolicy) -> Result<PricingPolicy, FixtureError> {
        let amount = |value: Option<String>, fallback: i64| {
            value.as_deref().map_or(Ok(fallback), parse_amount)
        };

        Ok(PricingPolicy {
            base_volume_credit_threshold: self
                .base_volume_credit_threshold
                .unwrap_or(policy.base_volume_credit_threshold),
            tragedy_base_amount: amount(self.tragedy_base_amount, policy.tragedy_base_amount)?,
            tragedy_audience_threshold: self
                .tragedy_audience_threshold
                .unwrap_or(policy.tragedy_audience_threshold),
            tragedy_over_base_capacity_per_person: amount(
                self.tragedy_over_base_capacity_per_person,
                policy.tragedy_over_base_capacity_per_person,
            )?,
            comedy_base_amount: amount(self.comedy_base_amount, policy.comedy_base_amount)?,
            comedy_audience_threshold: self
                .comedy_audience_threshold
                .unwrap_or(policy.comedy_audience_threshold),
            comedy_over_base_capacity_amount: amount(
                self.comedy_over_base_capacity_amount,
                policy.comedy_over_base_capacity_amount,
            )?,
            comedy_over_base_capacity_per_person: amount(
                self.comedy_over_base_capacity_per_person,
                policy.comedy_over_base_capacity_per_person,
            )?,
            comedy_amount_per_audience: amount(
                self.comedy_amount_per_audience,
                policy.comedy_amount_per_audience,
            )?,
            comedy_extra_volume_factor: self
                .comedy_extra_volume_factor
                .unwrap_or(policy.comedy_extra_volume_factor),
        })
    }
}

/// Parse a dollar amount string (e.g. `"400.00"`) into cents
///
/// # Errors
///
/// Returns an error if the string is not a decimal number, is negative, or has more precision
/// than whole cents.
pub fn parse_amount(s: &str) -> Result<i64, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidAmount(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidAmount(s.to_string()));
    }

    let cents = amount
        .checked_mul(Decimal::from(PERCENT_FACTOR))
        .ok_or_else(|| FixtureError::InvalidAmount(s.to_string()))?;

    if !cents.fract().is_zero() {
        return Err(FixtureError::InvalidAmount(s.to_string()));
    }

    cents
        .to_i64()
        .ok_or_else(|| FixtureError::InvalidAmount(s.to_string()))
}

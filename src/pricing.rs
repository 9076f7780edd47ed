//! Pricing
//!
//! All money values are integer cents. Floating point never enters a charge calculation.

use std::num::NonZeroU32;

/// Audience size above which a performance starts earning volume credits.
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;

/// Flat charge for a tragedy.
pub const TRAGEDY_BASE_AMOUNT: i64 = 40_000;

/// Audience size included in the tragedy flat charge.
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;

/// Charge per attendee above [`TRAGEDY_AUDIENCE_THRESHOLD`].
pub const TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON: i64 = 1_000;

/// Flat charge for a comedy.
pub const COMEDY_BASE_AMOUNT: i64 = 30_000;

/// Audience size included in the comedy flat charge.
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;

/// One-off surcharge once a comedy exceeds [`COMEDY_AUDIENCE_THRESHOLD`].
pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: i64 = 10_000;

/// Charge per attendee above [`COMEDY_AUDIENCE_THRESHOLD`].
pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: i64 = 500;

/// Charge per attendee of a comedy, regardless of audience size.
pub const COMEDY_AMOUNT_PER_AUDIENCE: i64 = 300;

/// A comedy earns one extra volume credit for every this many attendees.
pub const COMEDY_EXTRA_VOLUME_FACTOR: NonZeroU32 = match NonZeroU32::new(5) {
    Some(factor) => factor,
    None => NonZeroU32::MIN,
};

/// Pricing and volume credit constants used by the performance calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Audience size above which a performance starts earning volume credits
    pub base_volume_credit_threshold: u32,

    /// Flat charge for a tragedy, in cents
    pub tragedy_base_amount: i64,

    /// Audience size included in the tragedy flat charge
    pub tragedy_audience_threshold: u32,

    /// Charge per attendee over the tragedy threshold, in cents
    pub tragedy_over_base_capacity_per_person: i64,

    /// Flat charge for a comedy, in cents
    pub comedy_base_amount: i64,

    /// Audience size included in the comedy flat charge
    pub comedy_audience_threshold: u32,

    /// One-off surcharge over the comedy threshold, in cents
    pub comedy_over_base_capacity_amount: i64,

    /// Charge per attendee over the comedy threshold, in cents
    pub comedy_over_base_capacity_per_person: i64,

    /// Charge per comedy attendee, in cents
    pub comedy_amount_per_audience: i64,

    /// Attendees per extra comedy volume credit
    pub comedy_extra_volume_factor: NonZeroU32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            base_volume_credit_threshold: BASE_VOLUME_CREDIT_THRESHOLD,
            tragedy_base_amount: TRAGEDY_BASE_AMOUNT,
            tragedy_audience_threshold: TRAGEDY_AUDIENCE_THRESHOLD,
            tragedy_over_base_capacity_per_person: TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON,
            comedy_base_amount: COMEDY_BASE_AMOUNT,
            comedy_audience_threshold: COMEDY_AUDIENCE_THRESHOLD,
            comedy_over_base_capacity_amount: COMEDY_OVER_BASE_CAPACITY_AMOUNT,
            comedy_over_base_capacity_per_person: COMEDY_OVER_BASE_CAPACITY_PER_PERSON,
            comedy_amount_per_audience: COMEDY_AMOUNT_PER_AUDIENCE,
            comedy_extra_volume_factor: COMEDY_EXTRA_VOLUME_FACTOR,
        }
    }
}

/// Attendees above `threshold`, or zero when the audience does not exceed it.
pub(crate) fn over_threshold(audience: u32, threshold: u32) -> u32 {
    audience.saturating_sub(threshold)
}

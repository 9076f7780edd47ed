//! Performance Calculators
//!
//! A calculator prices a single performance according to the genre of the play performed. The
//! genre set is closed: selecting a calculator for any other genre is an error, never a default.

use thiserror::Error;

use crate::{
    invoices::Performance,
    plays::{Genre, Play},
    pricing::{PricingPolicy, over_threshold},
};

pub mod comedy;
pub mod tragedy;

pub use comedy::ComedyCalculator;
pub use tragedy::TragedyCalculator;

/// Errors that can occur while selecting a calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// The play's genre tag has no pricing policy.
    #[error("unknown type: {0}")]
    UnknownGenre(String),

    /// The charge for a performance of the named play does not fit in an `i64` of cents.
    #[error("amount overflow for play: {0}")]
    AmountOverflow(String),
}

/// Genre-specific charge and volume credit calculation for one performance.
#[derive(Debug, Clone, Copy)]
pub enum PerformanceCalculator<'a> {
    /// Tragedy pricing
    Tragedy(TragedyCalculator<'a>),

    /// Comedy pricing
    Comedy(ComedyCalculator<'a>),
}

impl<'a> PerformanceCalculator<'a> {
    /// Select the calculator for the play's genre.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownGenre`] if the play's genre is not recognised.
    pub fn for_play(
        performance: &'a Performance,
        play: &'a Play,
        policy: &'a PricingPolicy,
    ) -> Result<Self, CalculatorError> {
        let calculator = match play.genre()? {
            Genre::Tragedy => {
                PerformanceCalculator::Tragedy(TragedyCalculator::new(performance, play, policy))
            }
            Genre::Comedy => {
                PerformanceCalculator::Comedy(ComedyCalculator::new(performance, play, policy))
            }
        };

        Ok(calculator)
    }

    /// The performance being priced.
    pub fn performance(&self) -> &'a Performance {
        match self {
            PerformanceCalculator::Tragedy(tragedy) => tragedy.performance(),
            PerformanceCalculator::Comedy(comedy) => comedy.performance(),
        }
    }

    /// The play that was performed.
    pub fn play(&self) -> &'a Play {
        match self {
            PerformanceCalculator::Tragedy(tragedy) => tragedy.play(),
            PerformanceCalculator::Comedy(comedy) => comedy.play(),
        }
    }

    /// Charge for the performance, in cents.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::AmountOverflow`] if the charge does not fit in an `i64`.
    pub fn amount(&self) -> Result<i64, CalculatorError> {
        match self {
            PerformanceCalculator::Tragedy(tragedy) => tragedy.amount(),
            PerformanceCalculator::Comedy(comedy) => comedy.amount(),
        }
    }

    /// Volume credits earned by the performance.
    ///
    /// Every genre earns the base credits; a genre may add a bonus on top.
    pub fn volume_credits(&self) -> u64 {
        let (audience, policy, extra) = match self {
            PerformanceCalculator::Tragedy(tragedy) => (
                tragedy.performance().audience,
                tragedy.policy(),
                tragedy.extra_volume_credits(),
            ),
            PerformanceCalculator::Comedy(comedy) => (
                comedy.performance().audience,
                comedy.policy(),
                comedy.extra_volume_credits(),
            ),
        };

        base_volume_credits(audience, policy) + extra
    }
}

/// Volume credits every performance earns: one per attendee above the base threshold.
pub fn base_volume_credits(audience: u32, policy: &PricingPolicy) -> u64 {
    u64::from(over_threshold(
        audience,
        policy.base_volume_credit_threshold,
    ))
}

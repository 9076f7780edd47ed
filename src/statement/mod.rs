//! Statement
//!
//! Assembles an invoice into a priced [`Statement`] that the plain text and HTML renderers share.

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    calculators::{CalculatorError, PerformanceCalculator},
    invoices::{Invoice, Performance},
    money::usd,
    plays::{PlayCatalog, PlayId},
    pricing::PricingPolicy,
};

pub mod html;
pub mod printer;
pub mod text;

pub use html::render_html;
pub use printer::StatementPrinter;
pub use text::render_plain_text;

/// Errors that can occur while building a statement.
#[derive(Debug, Error)]
pub enum StatementError {
    /// A performance refers to a play that is not in the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// No calculator exists for a play's genre.
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The parts of an invoice a statement is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct StatementData<'a> {
    invoice: &'a Invoice,
}

impl<'a> StatementData<'a> {
    /// Create statement data from an invoice.
    pub fn new(invoice: &'a Invoice) -> Self {
        Self { invoice }
    }

    /// Customer name
    pub fn customer(&self) -> &'a str {
        &self.invoice.customer
    }

    /// Performances in invoice order
    pub fn performances(&self) -> &'a [Performance] {
        &self.invoice.performances
    }
}

impl<'a> From<&'a Invoice> for StatementData<'a> {
    fn from(invoice: &'a Invoice) -> Self {
        Self::new(invoice)
    }
}

/// One priced performance.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLine<'a> {
    /// Name of the play performed
    pub play_name: &'a str,

    /// Number of attendees (seats)
    pub audience: u32,

    /// Charge for the performance
    pub amount: Money<'static, Currency>,

    /// Volume credits earned
    pub volume_credits: u64,
}

/// A fully priced statement, ready for rendering.
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    customer: &'a str,
    lines: Vec<StatementLine<'a>>,
    total_amount: Money<'static, Currency>,
    total_volume_credits: u64,
}

impl<'a> Statement<'a> {
    /// Price every performance and accumulate the totals.
    ///
    /// # Errors
    ///
    /// - [`StatementError::UnknownPlay`]: a performance refers to a play missing from the catalog.
    /// - [`StatementError::Calculator`]: a play's genre has no calculator, or a charge overflows.
    /// - [`StatementError::Money`]: wrapped money arithmetic error.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(customer = data.customer(), performances = data.performances().len())
    )]
    pub fn build(
        data: &StatementData<'a>,
        plays: &'a PlayCatalog,
        policy: &PricingPolicy,
    ) -> Result<Self, StatementError> {
        let mut lines = Vec::with_capacity(data.performances().len());
        let mut total_amount = usd(0);
        let mut total_volume_credits = 0;

        for performance in data.performances() {
            let play = plays.play_for(performance)?;

            let calculator =
                PerformanceCalculator::for_play(performance, play, policy).inspect_err(|_err| {
                    warn!(play_id = %performance.play_id, kind = %play.kind, "play has no calculator");
                })?;

            let amount = usd(calculator.amount()?);
            let volume_credits = calculator.volume_credits();

            trace!(
                play = %play.name,
                audience = performance.audience,
                %amount,
                volume_credits,
                "priced performance"
            );

            total_amount = total_amount.add(amount)?;
            total_volume_credits += volume_credits;

            lines.push(StatementLine {
                play_name: &play.name,
                audience: performance.audience,
                amount,
                volume_credits,
            });
        }

        debug!(%total_amount, total_volume_credits, "statement built");

        Ok(Self {
            customer: data.customer(),
            lines,
            total_amount,
            total_volume_credits,
        })
    }

    /// Customer name
    pub fn customer(&self) -> &'a str {
        self.customer
    }

    /// Priced performances, in invoice order
    pub fn lines(&self) -> &[StatementLine<'a>] {
        &self.lines
    }

    /// Sum of all performance charges
    pub fn total_amount(&self) -> Money<'static, Currency> {
        self.total_amount
    }

    /// Sum of all volume credits
    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

/// Output flavour of a rendered statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatementFormat {
    /// Indented plain text
    #[default]
    Text,

    /// HTML fragment with a table of performances
    Html,
}

impl StatementFormat {
    /// Render the statement in this format.
    pub fn render(self, statement: &Statement<'_>) -> String {
        match self {
            StatementFormat::Text => render_plain_text(statement),
            StatementFormat::Html => render_html(statement),
        }
    }
}

//! Statement Printer

use rusty_money::{Money, iso::Currency};

use crate::{invoices::Invoice, plays::PlayCatalog, pricing::PricingPolicy};

use super::{Statement, StatementData, StatementError, StatementFormat};

/// Renders statements for one invoice against a play catalog.
#[derive(Debug, Clone, Copy)]
pub struct StatementPrinter<'a> {
    invoice: &'a Invoice,
    plays: &'a PlayCatalog,
    policy: PricingPolicy,
}

impl<'a> StatementPrinter<'a> {
    /// Create a printer using the default pricing policy.
    pub fn new(invoice: &'a Invoice, plays: &'a PlayCatalog) -> Self {
        Self {
            invoice,
            plays,
            policy: PricingPolicy::default(),
        }
    }

    /// Use a different pricing policy.
    #[must_use]
    pub fn with_policy(mut self, policy: PricingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The invoice being printed.
    pub fn invoice(&self) -> &'a Invoice {
        self.invoice
    }

    /// Price the invoice without rendering it.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] if a play reference or genre cannot be resolved.
    pub fn build(&self) -> Result<Statement<'a>, StatementError> {
        Statement::build(&StatementData::new(self.invoice), self.plays, &self.policy)
    }

    /// Plain text statement.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] if a play reference or genre cannot be resolved.
    pub fn statement(&self) -> Result<String, StatementError> {
        self.render(StatementFormat::Text)
    }

    /// HTML statement.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] if a play reference or genre cannot be resolved.
    pub fn html_statement(&self) -> Result<String, StatementError> {
        self.render(StatementFormat::Html)
    }

    /// Statement in the given format.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] if a play reference or genre cannot be resolved.
    pub fn render(&self, format: StatementFormat) -> Result<String, StatementError> {
        Ok(format.render(&self.build()?))
    }

    /// Total amount owed for the invoice.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] if a play reference or genre cannot be resolved.
    pub fn total_amount(&self) -> Result<Money<'static, Currency>, StatementError> {
        Ok(self.build()?.total_amount())
    }

    /// Total volume credits earned for the invoice.
    ///
    /// # Errors
    ///
    /// Returns a [`StatementError`] if a play reference or genre cannot be resolved.
    pub fn total_volume_credits(&self) -> Result<u64, StatementError> {
        Ok(self.build()?.total_volume_credits())
    }
}

//! Fixtures
//!
//! Loads plays, invoices and pricing policies from YAML files laid out as
//! `<base>/<category>/<name>.yml`.

use std::{fs, path::PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    invoices::Invoice,
    plays::PlayCatalog,
    pricing::PricingPolicy,
    statement::StatementPrinter,
};

pub mod invoices;
pub mod plays;
pub mod pricing;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid money amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// No invoices loaded
    #[error("No invoices loaded")]
    NoInvoices,

    /// Invoice index out of range
    #[error("Invoice not found, available: {available}, requested: {requested}")]
    InvoiceNotFound {
        /// Number of invoices loaded
        available: usize,
        /// Requested invoice index
        requested: usize,
    },
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    plays: PlayCatalog,
    invoices: Vec<Invoice>,
    policy: PricingPolicy,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            plays: PlayCatalog::new(),
            invoices: Vec::new(),
            policy: PricingPolicy::default(),
        }
    }

    fn path(&self, category: &str, name: &str) -> PathBuf {
        self.base_path.join(category).join(format!("{name}.yml"))
    }

    fn read<T: DeserializeOwned>(&self, category: &str, name: &str) -> Result<T, FixtureError> {
        let file_path = self.path(category, name);

        debug!(path = %file_path.display(), "loading fixture");

        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }

    /// Load plays from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_plays(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: plays::PlaysFixture = self.read("plays", name)?;

        for (id, play) in fixture.plays {
            self.plays.insert(id, play.into());
        }

        Ok(self)
    }

    /// Load invoices from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_invoices(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: invoices::InvoicesFixture = self.read("invoices", name)?;

        self.invoices
            .extend(fixture.invoices.into_iter().map(Invoice::from));

        Ok(self)
    }

    /// Load a pricing policy from a YAML fixture file
    ///
    /// Fields missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an amount is malformed.
    pub fn load_pricing(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: pricing::PricingFixture = self.read("pricing", name)?;

        self.policy = fixture.apply_to(PricingPolicy::default())?;

        Ok(self)
    }

    /// Load a complete fixture set (plays, invoices and, if present, pricing with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::new().load_set(name)
    }

    /// Load a complete fixture set from this fixture's base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn load_set(mut self, name: &str) -> Result<Self, FixtureError> {
        self.load_plays(name)?.load_invoices(name)?;

        if self.path("pricing", name).try_exists()? {
            self.load_pricing(name)?;
        }

        Ok(self)
    }

    /// Loaded play catalog
    pub fn plays(&self) -> &PlayCatalog {
        &self.plays
    }

    /// Loaded invoices
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Pricing policy in effect
    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    /// Get an invoice by index
    ///
    /// # Errors
    ///
    /// Returns an error if no invoices are loaded or the index is out of range.
    pub fn invoice(&self, idx: usize) -> Result<&Invoice, FixtureError> {
        if self.invoices.is_empty() {
            return Err(FixtureError::NoInvoices);
        }

        self.invoices
            .get(idx)
            .ok_or(FixtureError::InvoiceNotFound {
                available: self.invoices.len(),
                requested: idx,
            })
    }

    /// Statement printers for every loaded invoice, using the loaded plays and pricing
    pub fn printers(&self) -> impl Iterator<Item = StatementPrinter<'_>> {
        self.invoices
            .iter()
            .map(|invoice| StatementPrinter::new(invoice, &self.plays).with_policy(self.policy))
    }

    /// Statement printer for one invoice
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice does not exist.
    pub fn printer(&self, idx: usize) -> Result<StatementPrinter<'_>, FixtureError> {
        let invoice = self.invoice(idx)?;

        Ok(StatementPrinter::new(invoice, &self.plays).with_policy(self.policy))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

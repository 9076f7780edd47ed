//! Invoice Fixtures

use serde::Deserialize;

use crate::{
    invoices::{Invoice, Performance},
    plays::PlayId,
};

/// Wrapper for invoices in YAML
#[derive(Debug, Deserialize)]
pub struct InvoicesFixture {
    /// Invoices in file order
    pub invoices: Vec<InvoiceFixture>,
}

/// Invoice Fixture
#[derive(Debug, Deserialize)]
pub struct InvoiceFixture {
    /// Customer name
    pub customer: String,

    /// Performances in billing order
    pub performances: Vec<PerformanceFixture>,
}

/// Performance Fixture
#[derive(Debug, Deserialize)]
pub struct PerformanceFixture {
    /// Play identifier
    #[serde(rename = "playID")]
    pub play_id: PlayId,

    /// Number of attendees
    pub audience: u32,
}

impl From<InvoiceFixture> for Invoice {
    fn from(fixture: InvoiceFixture) -> Self {
        let performances: Vec<Performance> = fixture
            .performances
            .into_iter()
            .map(|performance| Performance::new(performance.play_id, performance.audience))
            .collect();

        Invoice::new(fixture.customer, performances)
    }
}

//! Invoices

use crate::plays::PlayId;

/// A single billed performance of a play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performance {
    /// Identifier of the play that was performed
    pub play_id: PlayId,

    /// Number of attendees
    pub audience: u32,
}

impl Performance {
    /// Create a new performance.
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// One customer's billable performances, in billing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    /// Customer name
    pub customer: String,

    /// Performances
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Create a new invoice.
    pub fn new(customer: impl Into<String>, performances: impl Into<Vec<Performance>>) -> Self {
        Self {
            customer: customer.into(),
            performances: performances.into(),
        }
    }
}

//! Playbill
//!
//! Playbill prices theatrical performances and renders customer billing statements as plain
//! text or HTML.

pub mod calculators;
pub mod fixtures;
pub mod invoices;
pub mod logging;
pub mod money;
pub mod plays;
pub mod pricing;
pub mod statement;
pub mod utils;

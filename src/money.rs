//! Money

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Number of cents in a dollar.
pub const PERCENT_FACTOR: i64 = 100;

/// Convert an amount in cents into US dollars for display.
///
/// Formatting the result gives the US currency form, e.g. `$1,730.00`.
pub fn usd(cents: i64) -> Money<'static, Currency> {
    let mut dollars = Decimal::from(cents) / Decimal::from(PERCENT_FACTOR);
    dollars.rescale(iso::USD.exponent);

    Money::from_decimal(dollars, iso::USD)
}

//! Integration tests rendering the bundled fixture sets.
//!
//! The default set is the classic `BigCo` invoice:
//!
//! - Hamlet (tragedy, 55 seats): $400.00 + 25 * $10.00 = $650.00, 25 credits
//! - As You Like It (comedy, 35 seats): $300.00 + $100.00 + 15 * $5.00 + 35 * $3.00 = $580.00,
//!   5 + 7 = 12 credits
//! - Othello (tragedy, 40 seats): $400.00 + 10 * $10.00 = $500.00, 10 credits
//!
//! Totals: $1,730.00 and 47 credits.

use testresult::TestResult;

use playbill::{
    calculators::CalculatorError,
    fixtures::Fixture,
    statement::{StatementError, StatementFormat},
};

#[test]
fn default_set_renders_plain_text() -> TestResult {
    let fixture = Fixture::from_set("default")?;

    let text = fixture.printer(0)?.statement()?;

    assert_eq!(
        text,
        concat!(
            "Statement for BigCo\n",
            "  Hamlet: $650.00 (55 seats)\n",
            "  As You Like It: $580.00 (35 seats)\n",
            "  Othello: $500.00 (40 seats)\n",
            "Amount owed is $1,730.00\n",
            "You earned 47 credits\n",
        )
    );

    Ok(())
}

#[test]
fn default_set_renders_html() -> TestResult {
    let fixture = Fixture::from_set("default")?;

    let html = fixture.printer(0)?.html_statement()?;

    assert_eq!(
        html,
        concat!(
            "<h1>Statement for BigCo</h1>\n",
            "<table>\n",
            " <tr><th>play</th><th>seats</th><th>cost</th></tr>\n",
            " <tr><td>Hamlet</td><td>55</td><td>$650.00</td></tr>\n",
            " <tr><td>As You Like It</td><td>35</td><td>$580.00</td></tr>\n",
            " <tr><td>Othello</td><td>40</td><td>$500.00</td></tr>\n",
            "</table>\n",
            "<p>Amount owed is <em>$1,730.00</em></p>\n",
            "<p>You earned <em>47</em> credits</p>\n",
        )
    );

    Ok(())
}

#[test]
fn touring_set_uses_its_pricing_fixture() -> TestResult {
    let fixture = Fixture::from_set("touring")?;

    // As You Like It: $250.00 + 20 * $3.00, 20 / 10 bonus credits
    // Hamlet: $350.00 flat, no credits at the threshold
    assert_eq!(
        fixture.printer(0)?.render(StatementFormat::Text)?,
        concat!(
            "Statement for Globe Touring Company\n",
            "  As You Like It: $310.00 (20 seats)\n",
            "  Hamlet: $350.00 (30 seats)\n",
            "Amount owed is $660.00\n",
            "You earned 2 credits\n",
        )
    );

    Ok(())
}

#[test]
fn touring_set_empty_invoice_renders_zero_totals() -> TestResult {
    let fixture = Fixture::from_set("touring")?;
    let printer = fixture.printer(1)?;

    assert_eq!(
        printer.statement()?,
        "Statement for Empty Barn Theatre\nAmount owed is $0.00\nYou earned 0 credits\n"
    );
    assert_eq!(
        printer.html_statement()?,
        concat!(
            "<h1>Statement for Empty Barn Theatre</h1>\n",
            "<table>\n",
            " <tr><th>play</th><th>seats</th><th>cost</th></tr>\n",
            "</table>\n",
            "<p>Amount owed is <em>$0.00</em></p>\n",
            "<p>You earned <em>0</em> credits</p>\n",
        )
    );

    Ok(())
}

#[test]
fn touring_set_unknown_genre_fails_both_renderers() -> TestResult {
    let fixture = Fixture::from_set("touring")?;
    let printer = fixture.printer(2)?;

    for format in [StatementFormat::Text, StatementFormat::Html] {
        let result = printer.render(format);

        assert!(
            matches!(
                &result,
                Err(StatementError::Calculator(CalculatorError::UnknownGenre(kind))) if kind == "history"
            ),
            "expected unknown genre error, got {result:?}"
        );
    }

    Ok(())
}

#[test]
fn unknown_genre_error_message_names_the_type() -> TestResult {
    let fixture = Fixture::from_set("touring")?;

    let error = fixture
        .printer(2)?
        .statement()
        .err()
        .ok_or("expected an error")?;

    assert_eq!(error.to_string(), "unknown type: history");

    Ok(())
}

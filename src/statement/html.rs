//! HTML Statement

use std::borrow::Cow;

use super::Statement;

/// Render a statement as an HTML fragment: a heading, a table of performances and a footer.
///
/// Customer and play names are escaped.
pub fn render_html(statement: &Statement<'_>) -> String {
    let rows: String = statement
        .lines()
        .iter()
        .map(|line| {
            format!(
                " <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(line.play_name),
                line.audience,
                line.amount
            )
        })
        .collect();

    format!(
        concat!(
            "<h1>Statement for {customer}</h1>\n",
            "<table>\n",
            " <tr><th>play</th><th>seats</th><th>cost</th></tr>\n",
            "{rows}",
            "</table>\n",
            "<p>Amount owed is <em>{total}</em></p>\n",
            "<p>You earned <em>{credits}</em> credits</p>\n",
        ),
        customer = escape(statement.customer()),
        rows = rows,
        total = statement.total_amount(),
        credits = statement.total_volume_credits(),
    )
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

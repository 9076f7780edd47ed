//! Plain Text Statement

use super::Statement;

/// Render a statement as indented plain text.
pub fn render_plain_text(statement: &Statement<'_>) -> String {
    let rows: String = statement
        .lines()
        .iter()
        .map(|line| {
            format!(
                "  {}: {} ({} seats)\n",
                line.play_name, line.amount, line.audience
            )
        })
        .collect();

    format!(
        "Statement for {}\n{rows}Amount owed is {}\nYou earned {} credits\n",
        statement.customer(),
        statement.total_amount(),
        statement.total_volume_credits(),
    )
}

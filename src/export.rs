//! Plain-text export of expense lists.
//!
//! Exports are derived views: they read a slice of expenses plus the
//! lookup data needed to resolve names, and return a `String` for the
//! caller to write wherever it wants.

use crate::errors::LedgerError;
use crate::ledger::{Category, Expense, Settings};
use crate::time;

const CSV_HEADERS: [&str; 5] = ["Date", "Amount", "Description", "Category", "Tags"];

/// Renders expenses as CSV with a fixed header row.
///
/// Every field is quoted. Dates follow the ledger's configured display
/// format, amounts carry two decimals, and the category column shows
/// the category name, falling back to the raw id when the category has
/// been deleted out from under the expense.
pub fn expenses_to_csv(expenses: &[Expense], categories: &[Category], settings: &Settings) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(expenses.len() + 1);
    lines.push(csv_row(CSV_HEADERS.iter().map(|header| header.to_string())));
    for expense in expenses {
        let category = categories
            .iter()
            .find(|candidate| candidate.id == expense.category)
            .map(|candidate| candidate.name.clone())
            .unwrap_or_else(|| expense.category.to_string());
        lines.push(csv_row(
            [
                time::format_date(expense.date, &settings.date_format),
                format!("{:.2}", expense.amount),
                expense.description.clone(),
                category,
                expense.tags.join(", "),
            ]
            .into_iter(),
        ));
    }
    lines.join("\n")
}

fn csv_row(fields: impl Iterator<Item = String>) -> String {
    fields
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<String>>()
        .join(",")
}

/// Renders expenses as pretty-printed JSON, preserving every field as
/// stored.
pub fn expenses_to_json(expenses: &[Expense]) -> Result<String, LedgerError> {
    Ok(serde_json::to_string_pretty(expenses)?)
}

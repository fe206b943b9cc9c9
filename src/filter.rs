//! Expense list filtering and ordering.
//!
//! A filter is a plain value the caller fills in and hands to
//! [`filter_expenses`]; criteria left at their defaults are inert, so
//! the default filter passes every expense through untouched apart
//! from ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::Expense;

/// Criteria for narrowing and ordering an expense list. All criteria
/// combine with AND.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring matched against the description or
    /// any tag. Empty matches everything.
    pub query: String,
    pub category: Option<Uuid>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Lower amount bound; zero means no bound.
    pub min_amount: f64,
    /// Upper amount bound; zero means no bound.
    pub max_amount: f64,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for ExpenseFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: None,
            date_from: None,
            date_to: None,
            min_amount: 0.0,
            max_amount: 0.0,
            sort_by: SortKey::Date,
            sort_order: SortOrder::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Amount,
    Category,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Applies `filter` to `expenses` and returns the surviving entries in
/// the requested order. The input slice is left untouched.
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    let mut matched: Vec<Expense> = expenses
        .iter()
        .filter(|expense| matches(expense, filter))
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let ordering = match filter.sort_by {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Category => a.category.cmp(&b.category),
        };
        match filter.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    matched
}

fn matches(expense: &Expense, filter: &ExpenseFilter) -> bool {
    if !filter.query.is_empty() {
        let query = filter.query.to_lowercase();
        let in_description = expense.description.to_lowercase().contains(&query);
        let in_tags = expense
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query));
        if !in_description && !in_tags {
            return false;
        }
    }
    if let Some(category) = filter.category {
        if expense.category != category {
            return false;
        }
    }
    if let Some(from) = filter.date_from {
        if expense.date < from {
            return false;
        }
    }
    if let Some(to) = filter.date_to {
        if expense.date > to {
            return false;
        }
    }
    if filter.min_amount > 0.0 && expense.amount < filter.min_amount {
        return false;
    }
    if filter.max_amount > 0.0 && expense.amount > filter.max_amount {
        return false;
    }
    true
}

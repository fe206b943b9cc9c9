use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded transaction.
///
/// Expenses are created directly by the user or materialized from a
/// [`RecurringExpense`](super::RecurringExpense) template; either way the
/// ledger snapshot is their only owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Expense {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Uuid,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category,
            date,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

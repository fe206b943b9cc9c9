use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rule for generating future expenses; not itself a transaction.
///
/// `end_date` is the last date an occurrence may still be generated on
/// (an occurrence falling exactly on `end_date` is produced, later ones
/// are not).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category: Uuid,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RecurringExpense {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Uuid,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category,
            frequency,
            start_date,
            end_date: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// How often a recurring template produces an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

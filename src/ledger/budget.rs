use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending guardrail for a specific category.
///
/// `start_date` records when the cap was set up and is informational:
/// progress is always measured against the period window containing the
/// reference date, never relative to `start_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: Uuid,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
}

impl Budget {
    pub fn new(category: Uuid, amount: f64, period: BudgetPeriod, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            period,
            start_date,
        }
    }
}

/// Enumeration of budgeting periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    Monthly,
}

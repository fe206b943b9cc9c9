use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked service subscription.
///
/// Unlike a [`RecurringExpense`](super::RecurringExpense) a subscription
/// never materializes ledger entries; it exists for its own cost
/// rollups. `next_billing_date` is advanced by the caller, not
/// recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub category: Uuid,
    pub billing_cycle: BillingCycle,
    pub start_date: NaiveDate,
    pub next_billing_date: NaiveDate,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category: Uuid,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
        next_billing_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            category,
            billing_cycle,
            start_date,
            next_billing_date,
            is_active: true,
            icon: None,
            color: None,
        }
    }

    /// The subscription cost normalized to one month.
    pub fn monthly_cost(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.amount,
            BillingCycle::Yearly => self.amount / 12.0,
        }
    }
}

/// Billing cadence for a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

//! Read-side aggregation over ledger snapshots.
//!
//! Every function here is a pure fold over borrowed slices; nothing in
//! this module mutates or stores state. Totals are recomputed on
//! demand rather than cached, so they can never drift from the
//! snapshot they were derived from.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::ledger::{Budget, BudgetPeriod, Expense, Subscription};
use crate::time;

/// Progress of one budget against the spending recorded in its
/// category over the current period window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub spent: f64,
    /// Never negative; an overspent budget reports zero remaining and
    /// lets `percentage` carry the overshoot.
    pub remaining: f64,
    /// Spent as a share of the budgeted amount, in percent. May exceed
    /// 100. A zero-amount budget reports 0 rather than dividing.
    pub percentage: f64,
}

/// One day of a spending trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Sum of all expense amounts.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Sum of the amounts recorded in one category.
pub fn total_by_category(expenses: &[Expense], category: Uuid) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.category == category)
        .map(|expense| expense.amount)
        .sum()
}

/// Sum of the amounts falling inside the period window containing
/// `reference`.
pub fn total_by_period(expenses: &[Expense], period: BudgetPeriod, reference: NaiveDate) -> f64 {
    let window = time::period_window(period, reference);
    expenses
        .iter()
        .filter(|expense| window.contains(expense.date))
        .map(|expense| expense.amount)
        .sum()
}

/// Evaluates one budget against the expenses of its category for the
/// period window containing `reference`.
pub fn budget_progress(budget: &Budget, expenses: &[Expense], reference: NaiveDate) -> BudgetProgress {
    let window = time::period_window(budget.period, reference);
    let spent: f64 = expenses
        .iter()
        .filter(|expense| expense.category == budget.category && window.contains(expense.date))
        .map(|expense| expense.amount)
        .sum();
    let remaining = (budget.amount - spent).max(0.0);
    let percentage = if budget.amount > 0.0 {
        spent / budget.amount * 100.0
    } else {
        0.0
    };
    BudgetProgress {
        spent,
        remaining,
        percentage,
    }
}

/// Per-category totals keyed by category id. Categories with no
/// expenses are absent from the map.
pub fn spending_by_category(expenses: &[Expense]) -> HashMap<Uuid, f64> {
    let mut totals: HashMap<Uuid, f64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Mean amount across all expenses, zero when there are none.
pub fn average_expense(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        return 0.0;
    }
    total(expenses) / expenses.len() as f64
}

/// Daily totals for the last `days` days ending at `today`, oldest
/// first. The series always has exactly `days` entries; days without
/// spending carry a zero so charts stay contiguous.
pub fn spending_trend(expenses: &[Expense], days: usize, today: NaiveDate) -> Vec<TrendPoint> {
    (0..days)
        .map(|offset| {
            let date = today - Duration::days((days - 1 - offset) as i64);
            let amount = expenses
                .iter()
                .filter(|expense| expense.date == date)
                .map(|expense| expense.amount)
                .sum();
            TrendPoint { date, amount }
        })
        .collect()
}

/// Combined monthly cost of the active subscriptions. Yearly plans
/// contribute one twelfth of their amount.
pub fn subscription_monthly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|subscription| subscription.is_active)
        .map(|subscription| subscription.monthly_cost())
        .sum()
}

/// Combined yearly cost of the active subscriptions, derived from the
/// monthly total so the two figures always agree.
pub fn subscription_yearly_total(subscriptions: &[Subscription]) -> f64 {
    subscription_monthly_total(subscriptions) * 12.0
}

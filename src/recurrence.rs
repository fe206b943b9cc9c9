//! Materializes due occurrences of recurring-expense templates.
//!
//! The scan is pure: it inspects a snapshot and builds the expenses
//! that are due, leaving the caller to feed them back through the
//! state machine. Running it repeatedly on the same logical day is
//! idempotent, since an occurrence whose (description, category, date)
//! triple already exists in the ledger is never produced again.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::ledger::{Expense, LedgerState, RecurringExpense};
use crate::time;

/// Builds one due expense per template, as of `today`.
///
/// A template yields at most a single occurrence per pass even when
/// several periods have elapsed since its anchor; repeat the pass to
/// backfill further periods.
pub fn due_expenses(state: &LedgerState, today: NaiveDate) -> Vec<Expense> {
    let mut due: Vec<Expense> = Vec::new();
    for rule in &state.recurring_expenses {
        if let Some(expense) = next_due_expense(rule, state, today) {
            // Two templates describing the same series must not emit
            // the same occurrence twice within one pass.
            let pending = due.iter().any(|queued| {
                queued.description == expense.description
                    && queued.category == expense.category
                    && queued.date == expense.date
            });
            if !pending {
                due.push(expense);
            }
        }
    }
    due
}

fn next_due_expense(
    rule: &RecurringExpense,
    state: &LedgerState,
    today: NaiveDate,
) -> Option<Expense> {
    let anchor = last_generated_date(rule, state).unwrap_or(rule.start_date);
    let next = time::next_occurrence(anchor, rule.frequency);
    if next > today {
        return None;
    }
    if let Some(end) = rule.end_date {
        if next > end {
            return None;
        }
    }
    let exists = state.expenses.iter().any(|expense| {
        expense.description == rule.description
            && expense.category == rule.category
            && expense.date == next
    });
    if exists {
        return None;
    }
    Some(Expense::new(
        rule.amount,
        rule.description.clone(),
        rule.category,
        next,
    ))
}

/// The date of the most recent expense matching the template's
/// description and category exactly; the next occurrence steps forward
/// from it. Templates with no generated history anchor on their start
/// date.
fn last_generated_date(rule: &RecurringExpense, state: &LedgerState) -> Option<NaiveDate> {
    state
        .expenses
        .iter()
        .filter(|expense| {
            expense.description == rule.description && expense.category == rule.category
        })
        .map(|expense| expense.date)
        .max()
}

/// Models the generator's fixed-interval wake-up without a background
/// thread: the host drives the tracker's `tick` from its own loop and
/// the schedule decides whether a generation pass is due. A schedule
/// that has never run is due immediately, which covers the
/// process-start pass. Cancellation is simply ceasing to poll.
#[derive(Debug, Clone)]
pub struct GenerationSchedule {
    interval: Duration,
    last_run: Option<DateTime<Utc>>,
}

impl GenerationSchedule {
    /// The nominal once-every-24-hours cadence.
    pub fn daily() -> Self {
        Self::every(Duration::hours(24))
    }

    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_run {
            None => true,
            Some(last) => now - last >= self.interval,
        }
    }

    pub fn mark_ran(&mut self, now: DateTime<Utc>) {
        self.last_run = Some(now);
    }
}

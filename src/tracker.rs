//! The tracker facade: owns the live snapshot and coordinates the
//! state machine, persistence, and recurring generation behind one
//! handle.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::aggregate::{self, BudgetProgress, TrendPoint};
use crate::command::{self, Command};
use crate::errors::LedgerError;
use crate::export;
use crate::filter::{self, ExpenseFilter};
use crate::ledger::{Budget, BudgetPeriod, Expense, LedgerState};
use crate::recurrence::{self, GenerationSchedule};
use crate::storage::StorageBackend;
use crate::time::Clock;

/// Facade that coordinates ledger state, persistence, and recurring
/// expense generation.
///
/// All mutation flows through [`ExpenseTracker::dispatch`]; reads hand
/// out borrows of the current snapshot. Every successful mutation
/// persists the new snapshot before it becomes visible.
pub struct ExpenseTracker {
    state: LedgerState,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
    schedule: GenerationSchedule,
}

impl ExpenseTracker {
    /// Opens the tracker: loads the persisted snapshot, or starts a
    /// fresh ledger with the seed categories when none exists, then
    /// runs one recurring-generation pass for the current date.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, LedgerError> {
        let state = match storage.load()? {
            Some(snapshot) => snapshot,
            None => {
                info!("no stored snapshot, starting a fresh ledger");
                LedgerState::default()
            }
        };
        let mut tracker = Self {
            state,
            storage,
            clock,
            schedule: GenerationSchedule::daily(),
        };
        tracker.generate_recurring()?;
        let now = tracker.clock.now();
        tracker.schedule.mark_ran(now);
        Ok(tracker)
    }

    /// The current immutable snapshot.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Runs `command` through the state machine and persists the
    /// result. Returns `true` when the snapshot changed, `false` when
    /// the command was absorbed as a no-op (nothing is written then).
    pub fn dispatch(&mut self, command: Command) -> Result<bool, LedgerError> {
        let next = command::apply(&self.state, command);
        if next == self.state {
            debug!("command absorbed as a no-op");
            return Ok(false);
        }
        self.storage.save(&next)?;
        self.state = next;
        Ok(true)
    }

    /// One generation pass for the current date. Each due template
    /// materializes at most one expense; the pass is idempotent within
    /// a day. Returns how many expenses were added.
    pub fn generate_recurring(&mut self) -> Result<usize, LedgerError> {
        let today = self.clock.today();
        let due = recurrence::due_expenses(&self.state, today);
        if due.is_empty() {
            return Ok(0);
        }
        let count = due.len();
        let mut next = self.state.clone();
        for expense in due {
            next = command::apply(&next, Command::AddExpense(expense));
        }
        self.storage.save(&next)?;
        self.state = next;
        info!(count, "materialized recurring expenses");
        Ok(count)
    }

    /// Repeats generation passes until no template is due, backfilling
    /// one period per pass. Returns the total number of expenses added.
    pub fn catch_up_recurring(&mut self) -> Result<usize, LedgerError> {
        let mut total = 0;
        loop {
            let added = self.generate_recurring()?;
            if added == 0 {
                return Ok(total);
            }
            total += added;
        }
    }

    /// Polling hook for the host's own loop. Runs a generation pass
    /// when the schedule says one is due, otherwise does nothing.
    pub fn tick(&mut self) -> Result<usize, LedgerError> {
        let now = self.clock.now();
        if !self.schedule.is_due(now) {
            return Ok(0);
        }
        let added = self.generate_recurring()?;
        self.schedule.mark_ran(now);
        Ok(added)
    }

    /// Sum of every recorded expense.
    pub fn total_spent(&self) -> f64 {
        aggregate::total(&self.state.expenses)
    }

    /// Spending inside the period window containing today.
    pub fn total_for_period(&self, period: BudgetPeriod) -> f64 {
        aggregate::total_by_period(&self.state.expenses, period, self.clock.today())
    }

    /// Progress of one budget for the period window containing today.
    pub fn budget_progress(&self, budget: &Budget) -> BudgetProgress {
        aggregate::budget_progress(budget, &self.state.expenses, self.clock.today())
    }

    /// Daily spending totals for the last `days` days ending today.
    pub fn spending_trend(&self, days: usize) -> Vec<TrendPoint> {
        aggregate::spending_trend(&self.state.expenses, days, self.clock.today())
    }

    /// The expense list narrowed and ordered by `filter`.
    pub fn filtered_expenses(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        filter::filter_expenses(&self.state.expenses, filter)
    }

    /// The full expense list rendered as CSV.
    pub fn export_csv(&self) -> String {
        export::expenses_to_csv(
            &self.state.expenses,
            &self.state.categories,
            &self.state.settings,
        )
    }

    /// The full expense list rendered as JSON.
    pub fn export_json(&self) -> Result<String, LedgerError> {
        export::expenses_to_json(&self.state.expenses)
    }

    /// Looks up an expense by id on the current snapshot.
    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.state.expense(id)
    }
}

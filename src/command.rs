//! The ledger state machine: the command set and the pure reducer that
//! is the only way a snapshot changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::{
    Budget, Category, Expense, LedgerState, RecurringExpense, SettingsPatch, Subscription,
};

/// A description of one intended mutation, consumed by [`apply`].
///
/// Commands carry pre-validated payloads; the reducer does not
/// re-validate them. Whole-entity variants replace by id, delete
/// variants address by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Command {
    AddExpense(Expense),
    UpdateExpense(Expense),
    DeleteExpense(Uuid),
    SetBudget(Budget),
    UpdateBudget(Budget),
    DeleteBudget(Uuid),
    AddRecurringExpense(RecurringExpense),
    UpdateRecurringExpense(RecurringExpense),
    DeleteRecurringExpense(Uuid),
    AddSubscription(Subscription),
    UpdateSubscription(Subscription),
    DeleteSubscription(Uuid),
    ToggleSubscription(Uuid),
    AddCategory(Category),
    UpdateCategory(Category),
    DeleteCategory(Uuid),
    UpdateSettings(SettingsPatch),
    LoadState(Box<LedgerState>),
}

/// Applies `command` to `state` and returns the next snapshot.
///
/// A deterministic total function: it never fails and never mutates its
/// input, so readers holding the previous snapshot are unaffected.
/// Lookup misses and guarded deletes leave the state unchanged rather
/// than erroring.
pub fn apply(state: &LedgerState, command: Command) -> LedgerState {
    let mut next = state.clone();
    match command {
        Command::AddExpense(expense) => next.expenses.push(expense),
        Command::UpdateExpense(expense) => replace_by_id(&mut next.expenses, expense, |e| e.id),
        Command::DeleteExpense(id) => next.expenses.retain(|expense| expense.id != id),

        Command::SetBudget(budget) => {
            // Upsert keyed on (category, period): the first existing
            // match is replaced in place, keeping its position.
            match next
                .budgets
                .iter_mut()
                .find(|b| b.category == budget.category && b.period == budget.period)
            {
                Some(slot) => *slot = budget,
                None => next.budgets.push(budget),
            }
        }
        Command::UpdateBudget(budget) => replace_by_id(&mut next.budgets, budget, |b| b.id),
        Command::DeleteBudget(id) => next.budgets.retain(|budget| budget.id != id),

        Command::AddRecurringExpense(rule) => next.recurring_expenses.push(rule),
        Command::UpdateRecurringExpense(rule) => {
            replace_by_id(&mut next.recurring_expenses, rule, |r| r.id)
        }
        Command::DeleteRecurringExpense(id) => {
            next.recurring_expenses.retain(|rule| rule.id != id)
        }

        Command::AddSubscription(subscription) => next.subscriptions.push(subscription),
        Command::UpdateSubscription(subscription) => {
            replace_by_id(&mut next.subscriptions, subscription, |s| s.id)
        }
        Command::DeleteSubscription(id) => next.subscriptions.retain(|sub| sub.id != id),
        Command::ToggleSubscription(id) => {
            if let Some(sub) = next.subscriptions.iter_mut().find(|sub| sub.id == id) {
                sub.is_active = !sub.is_active;
            }
        }

        Command::AddCategory(category) => next.categories.push(category),
        Command::UpdateCategory(category) => {
            replace_by_id(&mut next.categories, category, |c| c.id)
        }
        Command::DeleteCategory(id) => {
            // Categories still referenced by an expense, budget, or
            // recurring template must survive; the delete is a no-op.
            if !next.category_in_use(id) {
                next.categories.retain(|category| category.id != id);
            }
        }

        Command::UpdateSettings(patch) => next.settings.merge(patch),
        Command::LoadState(full) => next = *full,
    }
    next
}

fn replace_by_id<T, F>(items: &mut [T], replacement: T, id_of: F)
where
    F: Fn(&T) -> Uuid,
{
    let id = id_of(&replacement);
    if let Some(slot) = items.iter_mut().find(|item| id_of(item) == id) {
        *slot = replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{BudgetPeriod, Frequency, Theme};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_expense(category: Uuid) -> Expense {
        Expense::new(25.0, "Lunch", category, date(2024, 1, 10))
    }

    #[test]
    fn add_then_delete_expense_round_trips() {
        let state = LedgerState::default();
        let category = state.categories[0].id;
        let expense = sample_expense(category);
        let id = expense.id;

        let with_expense = apply(&state, Command::AddExpense(expense));
        assert_eq!(with_expense.expenses.len(), 1);

        let emptied = apply(&with_expense, Command::DeleteExpense(id));
        assert!(emptied.expenses.is_empty());
    }

    #[test]
    fn update_expense_replaces_only_the_matching_entry() {
        let state = LedgerState::default();
        let category = state.categories[0].id;
        let first = sample_expense(category);
        let second = sample_expense(category);
        let state = apply(&state, Command::AddExpense(first.clone()));
        let state = apply(&state, Command::AddExpense(second.clone()));

        let mut changed = first.clone();
        changed.amount = 99.0;
        let state = apply(&state, Command::UpdateExpense(changed));

        assert_eq!(state.expense(first.id).unwrap().amount, 99.0);
        assert_eq!(state.expense(second.id).unwrap().amount, 25.0);
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let state = LedgerState::default();
        let category = state.categories[0].id;
        let unknown = sample_expense(category);
        let next = apply(&state, Command::UpdateExpense(unknown));
        assert_eq!(next, state);
    }

    #[test]
    fn set_budget_collapses_same_category_and_period() {
        let state = LedgerState::default();
        let category = state.categories[0].id;
        let first = Budget::new(category, 100.0, BudgetPeriod::Monthly, date(2024, 1, 1));
        let second = Budget::new(category, 250.0, BudgetPeriod::Monthly, date(2024, 2, 1));

        let state = apply(&state, Command::SetBudget(first));
        let state = apply(&state, Command::SetBudget(second.clone()));

        assert_eq!(state.budgets.len(), 1);
        assert_eq!(state.budgets[0].amount, 250.0);
        assert_eq!(state.budgets[0].id, second.id);
    }

    #[test]
    fn set_budget_keeps_distinct_periods_apart() {
        let state = LedgerState::default();
        let category = state.categories[0].id;
        let monthly = Budget::new(category, 100.0, BudgetPeriod::Monthly, date(2024, 1, 1));
        let weekly = Budget::new(category, 30.0, BudgetPeriod::Weekly, date(2024, 1, 1));

        let state = apply(&state, Command::SetBudget(monthly));
        let state = apply(&state, Command::SetBudget(weekly));
        assert_eq!(state.budgets.len(), 2);
    }

    #[test]
    fn referenced_category_survives_delete() {
        let state = LedgerState::default();
        let category = state.categories[0].id;
        let with_expense = apply(&state, Command::AddExpense(sample_expense(category)));

        let after = apply(&with_expense, Command::DeleteCategory(category));
        assert_eq!(after.categories.len(), with_expense.categories.len());
        assert!(after.category(category).is_some());
    }

    #[test]
    fn budget_and_recurring_references_also_block_deletion() {
        let state = LedgerState::default();
        let category = state.categories[1].id;

        let budgeted = apply(
            &state,
            Command::SetBudget(Budget::new(
                category,
                50.0,
                BudgetPeriod::Weekly,
                date(2024, 1, 1),
            )),
        );
        assert!(apply(&budgeted, Command::DeleteCategory(category))
            .category(category)
            .is_some());

        let with_rule = apply(
            &state,
            Command::AddRecurringExpense(RecurringExpense::new(
                10.0,
                "Gym",
                category,
                Frequency::Monthly,
                date(2024, 1, 1),
            )),
        );
        assert!(apply(&with_rule, Command::DeleteCategory(category))
            .category(category)
            .is_some());
    }

    #[test]
    fn unreferenced_category_is_removed_exactly_once() {
        let state = LedgerState::default();
        let category = state.categories[2].id;
        let before = state.categories.len();

        let after = apply(&state, Command::DeleteCategory(category));
        assert_eq!(after.categories.len(), before - 1);
        assert!(after.category(category).is_none());
    }

    #[test]
    fn subscription_references_do_not_protect_a_category() {
        let state = LedgerState::default();
        let category = state.categories[2].id;
        let sub = Subscription::new(
            "Netflix",
            649.0,
            category,
            crate::ledger::BillingCycle::Monthly,
            date(2024, 1, 1),
            date(2024, 2, 1),
        );
        let state = apply(&state, Command::AddSubscription(sub));

        let after = apply(&state, Command::DeleteCategory(category));
        assert!(after.category(category).is_none());
    }

    #[test]
    fn toggle_subscription_flips_only_the_target() {
        let state = LedgerState::default();
        let category = state.categories[2].id;
        let sub = Subscription::new(
            "Spotify",
            119.0,
            category,
            crate::ledger::BillingCycle::Monthly,
            date(2024, 1, 1),
            date(2024, 2, 1),
        );
        let id = sub.id;
        let state = apply(&state, Command::AddSubscription(sub));

        let toggled = apply(&state, Command::ToggleSubscription(id));
        assert!(!toggled.subscription(id).unwrap().is_active);
        let back = apply(&toggled, Command::ToggleSubscription(id));
        assert!(back.subscription(id).unwrap().is_active);

        let missing = apply(&state, Command::ToggleSubscription(Uuid::new_v4()));
        assert_eq!(missing, state);
    }

    #[test]
    fn update_settings_merges_only_provided_fields() {
        let state = LedgerState::default();
        let patch = SettingsPatch {
            theme: Some(Theme::Dark),
            ..SettingsPatch::default()
        };
        let next = apply(&state, Command::UpdateSettings(patch));
        assert_eq!(next.settings.theme, Theme::Dark);
        assert_eq!(next.settings.currency, "INR");
        assert_eq!(next.settings.date_format, "%m/%d/%Y");
    }

    #[test]
    fn load_state_replaces_the_snapshot_wholesale() {
        let state = LedgerState::default();
        let mut replacement = LedgerState::default();
        replacement.settings.currency = "USD".into();
        replacement.categories.clear();

        let next = apply(&state, Command::LoadState(Box::new(replacement.clone())));
        assert_eq!(next, replacement);
    }

    #[test]
    fn replaying_a_command_sequence_is_deterministic() {
        let initial = LedgerState::default();
        let category = initial.categories[0].id;
        let commands = vec![
            Command::AddExpense(sample_expense(category)),
            Command::SetBudget(Budget::new(
                category,
                100.0,
                BudgetPeriod::Monthly,
                date(2024, 1, 1),
            )),
            Command::UpdateSettings(SettingsPatch {
                currency: Some("EUR".into()),
                ..SettingsPatch::default()
            }),
            Command::DeleteExpense(Uuid::new_v4()),
        ];

        let run = |state: &LedgerState| {
            commands
                .iter()
                .fold(state.clone(), |acc, cmd| apply(&acc, cmd.clone()))
        };
        assert_eq!(run(&initial), run(&initial));
    }

    #[test]
    fn apply_never_mutates_its_input() {
        let state = LedgerState::default();
        let pristine = state.clone();
        let category = state.categories[0].id;

        let _ = apply(&state, Command::AddExpense(sample_expense(category)));
        let _ = apply(&state, Command::DeleteCategory(category));
        assert_eq!(state, pristine);
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Budget, Category, Expense, RecurringExpense, Settings, Subscription};

/// The aggregate root: one immutable snapshot of every ledger collection.
///
/// Collections preserve insertion order for display purposes; the order
/// carries no other meaning. A snapshot is a plain value: every
/// mutation goes through [`crate::command::apply`], which returns a new
/// snapshot and leaves its input untouched. Readers holding an older
/// snapshot never observe a later write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerState {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub settings: Settings,
}

impl LedgerState {
    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    pub fn recurring_expense(&self, id: Uuid) -> Option<&RecurringExpense> {
        self.recurring_expenses.iter().find(|rule| rule.id == id)
    }

    pub fn subscription(&self, id: Uuid) -> Option<&Subscription> {
        self.subscriptions.iter().find(|sub| sub.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// True when any expense, budget, or recurring template references
    /// the category. Subscription references do not count.
    pub fn category_in_use(&self, id: Uuid) -> bool {
        self.expenses.iter().any(|expense| expense.category == id)
            || self.budgets.iter().any(|budget| budget.category == id)
            || self.recurring_expenses.iter().any(|rule| rule.category == id)
    }
}

impl Default for LedgerState {
    /// The bootstrap snapshot used when nothing has been persisted yet:
    /// six seed categories, empty collections, default settings.
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            budgets: Vec::new(),
            recurring_expenses: Vec::new(),
            subscriptions: Vec::new(),
            categories: Category::default_set(),
            settings: Settings::default(),
        }
    }
}

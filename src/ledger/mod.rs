//! Ledger domain models and the snapshot aggregate root.

pub mod budget;
pub mod category;
pub mod expense;
pub mod recurring;
pub mod settings;
pub mod state;
pub mod subscription;

pub use budget::{Budget, BudgetPeriod};
pub use category::Category;
pub use expense::Expense;
pub use recurring::{Frequency, RecurringExpense};
pub use settings::{Settings, SettingsPatch, Theme};
pub use state::LedgerState;
pub use subscription::{BillingCycle, Subscription};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Labels ledger activity for budgeting and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The six categories a fresh ledger is seeded with.
    pub fn default_set() -> Vec<Category> {
        vec![
            Category::new("Food", "#FF6B6B").with_icon("🍔"),
            Category::new("Transport", "#4ECDC4").with_icon("🚗"),
            Category::new("Entertainment", "#45B7D1").with_icon("🎬"),
            Category::new("Bills", "#FFA07A").with_icon("💳"),
            Category::new("Shopping", "#98D8C8").with_icon("🛍️"),
            Category::new("Other", "#95A5A6").with_icon("📦"),
        ]
    }
}

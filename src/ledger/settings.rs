use serde::{Deserialize, Serialize};

/// Presentation configuration carried inside the ledger snapshot.
///
/// `date_format` holds a chrono format string applied wherever the
/// ledger renders dates (e.g. CSV export).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub currency: String,
    pub theme: Theme,
    pub date_format: String,
}

impl Settings {
    /// Shallow-merges the patch: `None` fields keep their current value.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(date_format) = patch.date_format {
            self.date_format = date_format;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "INR".into(),
            theme: Theme::Light,
            date_format: "%m/%d/%Y".into(),
        }
    }
}

/// Supported display themes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// A partial settings update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

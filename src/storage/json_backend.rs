use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::ledger::LedgerState;

use super::{Result, StorageBackend};

const DEFAULT_DIR_NAME: &str = ".expense_core";
const LEDGER_FILE: &str = "ledger.json";
const TMP_SUFFIX: &str = "tmp";

/// Single-file JSON persistence for the ledger snapshot.
///
/// The snapshot is written to a temporary sibling first and moved into
/// place with a rename, so a crash mid-write leaves the previous file
/// intact.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Storage rooted at the default data directory,
    /// `~/.expense_core/ledger.json`. The `EXPENSE_CORE_HOME`
    /// environment variable overrides the directory.
    pub fn new_default() -> Self {
        Self {
            path: app_data_dir().join(LEDGER_FILE),
        }
    }

    /// Storage at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<LedgerState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let state: LedgerState = serde_json::from_str(&data)?;
        Ok(Some(state))
    }

    fn save(&self, state: &LedgerState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Returns the application data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

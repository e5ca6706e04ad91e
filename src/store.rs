//! Persistent preference storage.
//!
//! Two independent records survive across runs: the dark-theme flag and
//! the bounded query history. They live in separate JSON files so that a
//! crash mid-write of one record can never corrupt the other. The store
//! is read once at session start and written synchronously after each
//! mutation; last writer wins.
//!
//! Persistence failures never reach the user: loads fall back to
//! defaults and saves are best-effort.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::HistoryEntry;

/// Maximum number of history entries retained; inserting one more evicts
/// the oldest.
pub const HISTORY_CAP: usize = 10;

const THEME_FILE: &str = "theme.json";
const HISTORY_FILE: &str = "history.json";

/// Key/value persistence for the theme flag and the query history.
///
/// The two records are independent: mutating one must not touch the
/// other. Callers enforce the [`HISTORY_CAP`] before saving.
pub trait PreferenceStore: Send {
    /// Returns the last saved theme flag, or `false` if none exists.
    /// Missing or corrupt data falls back to the default.
    fn load_theme(&self) -> bool;

    /// Overwrites the stored theme flag. Best-effort side effect.
    fn save_theme(&self, dark: bool);

    /// Returns the persisted history, most-recent-first, or an empty
    /// list if absent or unreadable.
    fn load_history(&self) -> Vec<HistoryEntry>;

    /// Overwrites the stored history verbatim. Best-effort side effect.
    fn save_history(&self, entries: &[HistoryEntry]);

    /// Removes the persisted history entirely.
    fn clear_history(&self);
}

/// File-backed preference store.
///
/// Records live under the user's config directory
/// (e.g. `~/.config/autoqa/` on Linux) unless a directory is supplied.
#[derive(Debug, Clone)]
pub struct FileStore {
    theme_path: PathBuf,
    history_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the platform config directory.
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| {
                Error::validation("no config directory available on this platform", None)
            })?
            .join("autoqa");
        Self::with_dir(dir)
    }

    /// Creates a store rooted at an explicit directory.
    pub fn with_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|err| Error::io("failed to create preference directory", err))?;
        Ok(Self {
            theme_path: dir.join(THEME_FILE),
            history_path: dir.join(HISTORY_FILE),
        })
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
        let raw = fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn write_json<T: serde::Serialize>(path: &Path, value: &T) {
        // Best-effort: a failed save degrades to stale data on the next
        // load, which the contract tolerates.
        if let Ok(raw) = serde_json::to_string_pretty(value) {
            let _ = fs::write(path, raw);
        }
    }
}

impl PreferenceStore for FileStore {
    fn load_theme(&self) -> bool {
        Self::read_json(&self.theme_path).unwrap_or(false)
    }

    fn save_theme(&self, dark: bool) {
        Self::write_json(&self.theme_path, &dark);
    }

    fn load_history(&self) -> Vec<HistoryEntry> {
        Self::read_json(&self.history_path).unwrap_or_default()
    }

    fn save_history(&self, entries: &[HistoryEntry]) {
        Self::write_json(&self.history_path, &entries);
    }

    fn clear_history(&self) {
        let _ = fs::remove_file(&self.history_path);
    }
}

/// In-memory preference store satisfying the same contract.
///
/// Used by unit tests so session logic never touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    theme: RefCell<Option<bool>>,
    history: RefCell<Option<Vec<HistoryEntry>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load_theme(&self) -> bool {
        self.theme.borrow().unwrap_or(false)
    }

    fn save_theme(&self, dark: bool) {
        *self.theme.borrow_mut() = Some(dark);
    }

    fn load_history(&self) -> Vec<HistoryEntry> {
        self.history.borrow().clone().unwrap_or_default()
    }

    fn save_history(&self, entries: &[HistoryEntry]) {
        *self.history.borrow_mut() = Some(entries.to_vec());
    }

    fn clear_history(&self) {
        *self.history.borrow_mut() = None;
    }
}

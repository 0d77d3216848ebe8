//! # UI Preferences
//!
//! The only state Folio remembers between runs: the chosen theme.
//! Stored as `~/.folio/prefs.json`, written with atomic rename
//! (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::Theme;
use crate::core::config::folio_dir;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: Option<Theme>,
}

/// Returns `~/.folio/prefs.json`.
pub fn prefs_path() -> Option<PathBuf> {
    folio_dir().map(|d| d.join("prefs.json"))
}

/// Load prefs from `path`. Missing or unreadable files yield defaults.
pub fn load_prefs_from(path: &Path) -> Prefs {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Prefs::default(),
        Err(e) => {
            warn!("Failed to read prefs {}: {}", path.display(), e);
            return Prefs::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!("Ignoring malformed prefs {}: {}", path.display(), e);
            Prefs::default()
        }
    }
}

pub fn load_prefs() -> Prefs {
    prefs_path().map(|p| load_prefs_from(&p)).unwrap_or_default()
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn save_prefs_to(path: &Path, prefs: &Prefs) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    atomic_write_json(path, prefs)?;
    debug!("Saved prefs to {}", path.display());
    Ok(())
}

pub fn save_prefs(prefs: &Prefs) -> io::Result<()> {
    let path = prefs_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    save_prefs_to(&path, prefs)
}

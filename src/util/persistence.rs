use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::app_state::TradeState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "TradeBenefitCalculator";
const APP_NAME: &str = "TradeBenefitCalculator";

/// Bump the suffix if the stored layout ever changes incompatibly.
pub const STATE_FILE_NAME: &str = "trade-state.v1.json";

/// Location of the state file in the platform config directory.
pub fn default_state_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(STATE_FILE_NAME))
}

/// Reads a saved state. Missing, unreadable and malformed files all yield `None`.
pub fn load_persisted_state(path: &Path) -> Option<TradeState> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_persisted_state(path: &Path, state: &TradeState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// Deletes the saved state; `Ok(false)` when there was nothing to delete.
pub fn clear_persisted_state(path: &Path) -> Result<bool, PersistSaveError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(STATE_FILE_NAME);

        let mut state = TradeState::default();
        state
            .set_field("footprint.shipmentsPerYear", json!("1,250"))
            .unwrap();
        state.footprint.toggle_source_country("DEU");

        save_persisted_state(&path, &state).unwrap();
        assert_eq!(load_persisted_state(&path), Some(state));
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_persisted_state(&path), None);
        assert_eq!(load_persisted_state(&dir.path().join("absent.json")), None);
    }

    #[test]
    fn clearing_reports_whether_a_file_existed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        save_persisted_state(&path, &TradeState::default()).unwrap();
        assert!(clear_persisted_state(&path).unwrap());
        assert!(!clear_persisted_state(&path).unwrap());
    }
}

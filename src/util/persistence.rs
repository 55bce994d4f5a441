use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::EngineParams;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "SellerPricing";
const APP_NAME: &str = "SellerPricing";
const SETTINGS_FILE: &str = "settings.json";

pub fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Stored parameters, or the defaults when nothing usable is on disk.
pub fn load_engine_params() -> EngineParams {
    match settings_file() {
        Some(path) => load_engine_params_from(&path),
        None => {
            tracing::warn!("no config directory available, using default settings");
            EngineParams::default()
        }
    }
}

pub fn load_engine_params_from(path: &Path) -> EngineParams {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved settings");
            return EngineParams::default();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read settings");
            return EngineParams::default();
        }
    };

    match serde_json::from_str::<EngineParams>(&data) {
        Ok(params) => params.sanitized(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt settings");
            EngineParams::default()
        }
    }
}

pub fn save_engine_params(params: &EngineParams) -> Result<PathBuf, PersistSaveError> {
    let path = settings_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_engine_params_to(&path, params)?;
    Ok(path)
}

pub fn save_engine_params_to(path: &Path, params: &EngineParams) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(params)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

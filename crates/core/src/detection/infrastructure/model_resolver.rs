use std::path::{Path, PathBuf};

use crate::error::MosaicError;
use crate::shared::constants::{APP_DIR_NAME, MODELS_DIR_NAME};

/// Finds a model file by name.
///
/// Returns the first `dir/name` that exists, in the order given. Nothing is
/// downloaded.
pub fn resolve(name: &str, search_dirs: &[PathBuf]) -> Result<PathBuf, MosaicError> {
    for dir in search_dirs {
        let candidate = dir.join(name);
        if candidate.is_file() {
            log::debug!("Resolved model {name} at {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(MosaicError::ModelUnavailable {
        name: name.to_string(),
        searched: search_dirs.to_vec(),
    })
}

/// Locations checked for a model that overrides the embedded one, highest
/// priority first:
///
/// 1. `models/` next to the running executable
/// 2. the platform data directory, e.g. `~/.local/share/mosaic-tool/models/`
pub fn default_model_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(2);

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join(MODELS_DIR_NAME));
    }

    if let Some(data_dir) = model_data_dir() {
        dirs.push(data_dir);
    }

    dirs
}

/// Platform-specific model directory.
///
/// - macOS: `~/Library/Application Support/mosaic-tool/models/`
/// - Linux: `$XDG_DATA_HOME/mosaic-tool/models/` or `~/.local/share/mosaic-tool/models/`
/// - Windows: `%APPDATA%/mosaic-tool/models/`
pub fn model_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR_NAME).join(MODELS_DIR_NAME))
}

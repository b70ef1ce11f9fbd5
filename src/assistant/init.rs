use crate::api::AssistantApi;
use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Environment variable that points the assistant at a data directory.
pub const HOME_ENV: &str = "ASSISTANT_HOME";

pub struct AssistantContext {
    pub api: AssistantApi<FileStore>,
}

/// Picks the data directory: an explicit override wins, then `ASSISTANT_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_with_env(explicit, std::env::var_os(HOME_ENV).map(PathBuf::from))
}

fn resolve_with_env(explicit: Option<&Path>, env_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    let proj_dirs = ProjectDirs::from("com", "assistant", "assistant").ok_or_else(|| {
        AssistantError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine a data directory; set ASSISTANT_HOME",
        ))
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Loads config and both collections from `data_dir`.
pub fn initialize(data_dir: PathBuf) -> Result<AssistantContext> {
    debug!("using data directory {}", data_dir.display());
    let config = AssistantConfig::load(&data_dir)?;
    let store = FileStore::with_config(data_dir, &config);
    let api = AssistantApi::open(store, config)?;

    Ok(AssistantContext { api })
}

//! Configuration for campath
//!
//! Stored as TOML. Lookup order: an explicit `--config` path, then
//! `$CAMPATH_CONFIG_DIR/config.toml`, then `<config dir>/campath/config.toml`.
//! A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CampathError, Result};

pub use types::{CampathConfig, RoutingConfig, DEFAULT_ORIGIN, DEFAULT_WALKING_SPEED_KMH};

const CONFIG_DIR: &str = "campath";
const CONFIG_FILE: &str = "config.toml";
const PATHS_FILE: &str = "paths.json";
const CAMPUS_FILE: &str = "campus.toml";
const CONFIG_DIR_ENV_VAR: &str = "CAMPATH_CONFIG_DIR";

impl CampathConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CampathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Resolve the config file: the explicit path when given, else the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a file, falling back to defaults when it does not exist
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("config file absent, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CampathError::io_operation("read config", path.display(), e))?;
        let config: CampathConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating its directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                CampathError::io_operation("create config directory", dir.display(), e)
            })?;
        }

        let content = self.to_toml_string()?;
        fs::write(path, content)
            .map_err(|e| CampathError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CampathError::Other(format!("failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        let speed = self.routing.walking_speed_kmh;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(CampathError::invalid_value(
                "routing.walking_speed_kmh",
                speed,
            ));
        }
        if self.routing.default_origin.trim().is_empty() {
            return Err(CampathError::invalid_value(
                "routing.default_origin",
                "(empty)",
            ));
        }
        Ok(())
    }

    /// Custom path store file: the configured one, else `paths.json` beside `config_path`
    pub fn paths_file_for(&self, config_path: &Path) -> PathBuf {
        match &self.paths_file {
            Some(path) => path.clone(),
            None => config_path
                .parent()
                .map(|dir| dir.join(PATHS_FILE))
                .unwrap_or_else(|| PathBuf::from(PATHS_FILE)),
        }
    }

    /// Campus file that location edits go to: the configured one, else
    /// `campus.toml` beside the config file
    pub fn campus_file_for(&self, config_path: &Path) -> PathBuf {
        match &self.campus {
            Some(path) => path.clone(),
            None => config_path
                .parent()
                .map(|dir| dir.join(CAMPUS_FILE))
                .unwrap_or_else(|| PathBuf::from(CAMPUS_FILE)),
        }
    }

    /// Returns the source description for display purposes
    pub fn source_display(path: &Path) -> String {
        if path.exists() {
            path.display().to_string()
        } else {
            format!("{} (not found, using defaults)", path.display())
        }
    }
}

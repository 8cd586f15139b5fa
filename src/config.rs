use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::model::SpectralType;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "functional-group-finder.json";
/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "FGF_CONFIG";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Startup settings.  Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding the reference tables.
    pub data_dir: PathBuf,
    pub initial_type: SpectralType,
    pub search_center: f64,
    pub search_half_width: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            initial_type: SpectralType::Ir,
            search_center: 10.0,
            search_half_width: 10.0,
        }
    }
}

impl ViewerConfig {
    /// Path of the reference table for `spectral_type`.
    pub fn reference_path(&self, spectral_type: SpectralType) -> PathBuf {
        self.data_dir.join(spectral_type.reference_file())
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Resolve the config path: `$FGF_CONFIG`, else [`CONFIG_FILE`].
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Load the config, falling back to defaults when the file is absent or
/// unreadable.
pub fn load_config() -> ViewerConfig {
    let path = config_path();
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return ViewerConfig::default();
    }
    match ViewerConfig::from_file(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Ignoring config: {e:#}");
            ViewerConfig::default()
        }
    }
}

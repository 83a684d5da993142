//! Display configuration loaded once at startup.
//!
//! The document lives at `config/display.yml` under the install root:
//!
//! ```yaml
//! display:
//!   width: 800
//!   height: 600
//!   fullscreen: false
//! ```
//!
//! Every key is required. There are no defaults and no environment overrides.

use std::env;
use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Location of the config document relative to the install root.
pub const CONFIG_RELATIVE_PATH: &str = "config/display.yml";

/// Resolves the config document under `root`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_RELATIVE_PATH)
}

/// Install root for an executable laid out as `<root>/bin/<exe>`.
pub fn install_root(exe: &Path) -> Result<PathBuf, ConfigError> {
    exe.parent()
        .and_then(Path::parent)
        .filter(|root| !root.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::InstallRoot {
            exe: exe.to_path_buf(),
        })
}

/// Config document of the running program, found from its own location.
pub fn installed_config_path() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe().map_err(ConfigError::CurrentExe)?;
    Ok(config_path(&install_root(&exe)?))
}

/// How the window should be created. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    pub fullscreen: bool,
}

#[derive(Serialize, Deserialize)]
struct Document {
    display: DisplayConfig,
}

impl DisplayConfig {
    /// Reads and parses the document at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded display config from {}: {}x{} fullscreen={}",
            path.display(),
            config.width,
            config.height,
            config.fullscreen
        );
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str::<Document>(text).map(|doc| doc.display)
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&Document { display: *self })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width.get(), self.height.get())
    }
}

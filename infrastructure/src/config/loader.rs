//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Prefix of environment overrides, e.g. `LOGSWITCH_LOG_LEVEL=debug`
pub const ENV_PREFIX: &str = "LOGSWITCH_";

const PROJECT_FILES: [&str; 2] = ["logswitch.toml", ".logswitch.toml"];
const ENV_KEYS: [&str; 4] = ["backend", "log_level", "out_format", "outfile"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LOGSWITCH_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./logswitch.toml` or `./.logswitch.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/logswitch/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Self::env_provider());

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// `LOGSWITCH_LOG_LEVEL` -> `logging.log_level`, and so on.
    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX)
            .only(&ENV_KEYS)
            .map(|key| format!("logging.{}", key.as_str().to_lowercase()).into())
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("logswitch").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

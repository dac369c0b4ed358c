use crate::constants::{
    DEFAULT_STATE_FILE, DOWNLOAD_BASE_OVERRIDE_VAR, DOWNLOAD_BASE_URL, GO_BINARY,
    GO_BINARY_OVERRIDE_VAR, INSTALL_DIR_NAME, INSTALL_PARENT, INSTALL_PARENT_OVERRIDE_VAR,
    LOG_LEVEL_VAR, STATE_FILE_OVERRIDE_VAR,
};
use simplelog::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub install_parent: PathBuf,
    pub download_base: String,
    pub download_dir: PathBuf,
    pub state_file: PathBuf,
    pub go_binary: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            install_parent: PathBuf::from(INSTALL_PARENT),
            download_base: DOWNLOAD_BASE_URL.to_string(),
            download_dir: PathBuf::from("."),
            state_file: DEFAULT_STATE_FILE.clone(),
            go_binary: PathBuf::from(GO_BINARY),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if let Ok(cwd) = std::env::current_dir() {
            config.download_dir = cwd;
        }
        config
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            install_parent: get(INSTALL_PARENT_OVERRIDE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.install_parent),
            download_base: get(DOWNLOAD_BASE_OVERRIDE_VAR)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.download_base),
            download_dir: defaults.download_dir,
            state_file: get(STATE_FILE_OVERRIDE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.state_file),
            go_binary: get(GO_BINARY_OVERRIDE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.go_binary),
            log_level: get(LOG_LEVEL_VAR)
                .and_then(|level| LevelFilter::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// The fixed directory a release unpacks into, e.g. `/usr/local/go`.
    pub fn install_root(&self) -> PathBuf {
        self.install_parent.join(INSTALL_DIR_NAME)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.install_root().join("bin")
    }
}

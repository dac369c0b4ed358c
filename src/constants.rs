use lazy_static::lazy_static;
use std::path::PathBuf;

pub const DOWNLOAD_BASE_URL: &str = "https://golang.org/dl";
pub const INSTALL_PARENT: &str = "/usr/local";
pub const INSTALL_DIR_NAME: &str = "go";
pub const PLATFORM: &str = "linux-amd64";
pub const ARCHIVE_EXTENSION: &str = "tar.gz";
pub const RELEASE_CANDIDATE_SUFFIX: &str = "rc";
pub const RELEASE_CANDIDATE_PREFIX: &str = "1.";
pub const GO_BINARY: &str = "go";

pub const ROLLBACK_VERSION_VAR: &str = "GO_ROLLBACK_VERSION";
pub const GOROOT_VAR: &str = "GOROOT";
pub const PATH_VAR: &str = "PATH";

pub const INSTALL_PARENT_OVERRIDE_VAR: &str = "GOV_INSTALL_PARENT";
pub const DOWNLOAD_BASE_OVERRIDE_VAR: &str = "GOV_DOWNLOAD_BASE";
pub const STATE_FILE_OVERRIDE_VAR: &str = "GOV_STATE_FILE";
pub const GO_BINARY_OVERRIDE_VAR: &str = "GOV_GO_BINARY";
pub const LOG_LEVEL_VAR: &str = "GOV_LOG";

lazy_static! {
    pub static ref STATE_DIR: PathBuf = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gov");
    pub static ref DEFAULT_STATE_FILE: PathBuf = STATE_DIR.join("env.json");
}

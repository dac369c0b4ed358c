use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Command '{0}' not found")]
    CommandNotFound(String),
    #[error("Missing argument: {0}")]
    MissingArgument(String),
    #[error("Unexpected argument '{argument}' for '{command}'")]
    UnexpectedArgument { command: &'static str, argument: String },
    #[error("Unknown flag '{flag}' for '{command}'")]
    UnknownFlag { command: &'static str, flag: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("release candidate versions must start with '1.', got '{0}'")]
    InvalidReleaseCandidateFormat(String),
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to run '{binary} version': {source}")]
    NotInstalled {
        binary: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{binary} version' exited with {status}")]
    CommandFailed { binary: PathBuf, status: ExitStatus },
    #[error("unexpected output format from 'go version' command: '{0}'")]
    UnexpectedOutputFormat(String),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("failed to download Go version {version}: {source}")]
    Download {
        version: String,
        #[source]
        source: FetchError,
    },
    #[error("failed to extract Go version {version}: {source}")]
    Extract {
        version: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid environment variable '{key}'")]
    InvalidVariable { key: String },
    #[error("failed to build {key} from its entries: {source}")]
    JoinPaths {
        key: String,
        #[source]
        source: std::env::JoinPathsError,
    },
    #[error("failed to read variable store {path}: {source}")]
    ReadStore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write variable store {path}: {source}")]
    WriteStore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("variable store {path} is not valid JSON: {source}")]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Invalid version: {0}")]
    InvalidVersion(#[from] ValidationError),
    #[error("Error removing existing Go installation at {path}: {source}")]
    Removal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error installing Go version: {0}")]
    Install(#[from] InstallError),
    #[error("Error updating environment variables: {0}")]
    Environment(#[from] EnvError),
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to parse command: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Switch(#[from] SwitchError),
    #[error("Failed to load variable store: {0}")]
    Store(#[from] EnvError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_errors_name_the_failing_phase() {
        let removal = SwitchError::Removal {
            path: PathBuf::from("/usr/local/go"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(removal.to_string().starts_with("Error removing existing Go installation"));

        let install = SwitchError::from(InstallError::Extract {
            version: "1.21.0".to_string(),
            source: io::Error::other("corrupt archive"),
        });
        assert_eq!(
            install.to_string(),
            "Error installing Go version: failed to extract Go version 1.21.0: corrupt archive"
        );

        let invalid = SwitchError::from(ValidationError::InvalidReleaseCandidateFormat(
            "21.0".to_string(),
        ));
        assert!(invalid.to_string().starts_with("Invalid version:"));
    }
}

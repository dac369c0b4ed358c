use crate::constants::RELEASE_CANDIDATE_PREFIX;
use crate::errors::{ProbeError, ValidationError};
use crate::types::VersionSpec;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

#[async_trait]
pub trait VersionProbe: Send + Sync {
    async fn current_version(&self) -> Result<String, ProbeError>;
}

pub struct Versions;
impl Versions {
    /// Only release candidates are checked; anything else is left to the download to reject.
    pub fn validate(spec: &VersionSpec) -> Result<(), ValidationError> {
        if spec.is_release_candidate && !spec.version.starts_with(RELEASE_CANDIDATE_PREFIX) {
            return Err(ValidationError::InvalidReleaseCandidateFormat(
                spec.version.to_string(),
            ));
        }

        Ok(())
    }

    /// Parses `go version go1.21.0 linux/amd64` into `1.21.0`.
    pub fn parse_version_output(output: &str) -> Result<String, ProbeError> {
        let token = output
            .split_whitespace()
            .nth(2)
            .ok_or_else(|| ProbeError::UnexpectedOutputFormat(output.trim().to_string()))?;

        Ok(token.strip_prefix("go").unwrap_or(token).to_string())
    }
}

pub struct GoVersionProbe {
    binary: PathBuf,
}

impl GoVersionProbe {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

#[async_trait]
impl VersionProbe for GoVersionProbe {
    async fn current_version(&self) -> Result<String, ProbeError> {
        let output = Command::new(&self.binary)
            .arg("version")
            .output()
            .await
            .map_err(|source| ProbeError::NotInstalled {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                binary: self.binary.clone(),
                status: output.status,
            });
        }

        Versions::parse_version_output(&String::from_utf8_lossy(&output.stdout))
    }
}

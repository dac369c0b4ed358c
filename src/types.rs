use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub version: String,
    pub is_release_candidate: bool,
}

impl VersionSpec {
    pub fn new(version: impl Into<String>, is_release_candidate: bool) -> Self {
        Self {
            version: version.into(),
            is_release_candidate,
        }
    }

    pub fn stable(version: impl Into<String>) -> Self {
        Self::new(version, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    Idle,
    Validating,
    Probing,
    Removing,
    Installing,
    UpdatingEnv,
    Done,
    Aborted,
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwitchState::Idle => "idle",
            SwitchState::Validating => "validating",
            SwitchState::Probing => "probing",
            SwitchState::Removing => "removing",
            SwitchState::Installing => "installing",
            SwitchState::UpdatingEnv => "updating environment",
            SwitchState::Done => "done",
            SwitchState::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchReport {
    pub version: String,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackOutcome {
    NothingToRollBack,
    RolledBack(String),
}

/// On-disk form of the persisted variable store.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoredVariables {
    pub variables: BTreeMap<String, String>,
}

use crate::constants::{GOROOT_VAR, PATH_VAR};
use crate::errors::EnvError;
use crate::types::StoredVariables;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Key-value view of the variables that outlive a single `gov` invocation.
pub trait EnvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError>;
}

fn check_variable(key: &str, value: &str) -> Result<(), EnvError> {
    if key.is_empty() || key.contains('=') || key.contains('\0') || value.contains('\0') {
        return Err(EnvError::InvalidVariable {
            key: key.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryEnvStore {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryEnvStore {
    pub fn with_vars<K, V>(vars: HashMap<K, V>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl EnvStore for MemoryEnvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        check_variable(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Variables persisted to a JSON file, layered over the environment the process inherited.
///
/// Persisted values win: the shell that launched `gov` only sees what `gov` wrote once it
/// evaluates `gov env`, so its copy is at best as fresh as the file and usually staler.
pub struct SessionEnvStore {
    path: PathBuf,
    stored: StoredVariables,
    inherited: HashMap<String, String>,
    apply_to_process: bool,
}

impl SessionEnvStore {
    /// Loads the store for this process; writes are mirrored into the process environment.
    pub fn load(path: &Path) -> Result<Self, EnvError> {
        let mut store = Self::load_with(path, std::env::vars())?;
        store.apply_to_process = true;
        Ok(store)
    }

    /// Loads the store over an explicit inherited environment, leaving the process untouched.
    pub fn load_with<I>(path: &Path, inherited: I) -> Result<Self, EnvError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let stored = match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| EnvError::MalformedStore {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => StoredVariables::default(),
            Err(source) => {
                return Err(EnvError::ReadStore {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            stored,
            inherited: inherited.into_iter().collect(),
            apply_to_process: false,
        })
    }

    fn save(&self) -> Result<(), EnvError> {
        let write_error = |source| EnvError::WriteStore {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let raw = serde_json::to_string_pretty(&self.stored).map_err(|source| {
            EnvError::MalformedStore {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, raw).map_err(write_error)
    }
}

impl EnvStore for SessionEnvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.stored
            .variables
            .get(key)
            .filter(|v| !v.is_empty())
            .or_else(|| self.inherited.get(key).filter(|v| !v.is_empty()))
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        check_variable(key, value)?;
        if self.apply_to_process {
            std::env::set_var(key, value);
        }

        self.stored
            .variables
            .insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// Points `GOROOT` at `root` and puts `bin` first on `PATH`, dropping older copies of it.
pub fn update_environment(store: &mut dyn EnvStore, root: &Path, bin: &Path) -> Result<(), EnvError> {
    let root = root.to_string_lossy();
    store.set(GOROOT_VAR, &root)?;

    let current = store.get(PATH_VAR).unwrap_or_default();
    let entries = std::iter::once(bin.to_path_buf()).chain(
        std::env::split_paths(&current).filter(|entry| entry != bin && !entry.as_os_str().is_empty()),
    );
    let path = std::env::join_paths(entries).map_err(|source| EnvError::JoinPaths {
        key: PATH_VAR.to_string(),
        source,
    })?;

    store.set(PATH_VAR, &path.to_string_lossy())
}

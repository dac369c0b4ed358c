use crate::config::Config;
use crate::constants::{GOROOT_VAR, ROLLBACK_VERSION_VAR};
use crate::env_store::{self, EnvStore, SessionEnvStore};
use crate::errors::{EnvError, SwitchError};
use crate::http::HttpFetcher;
use crate::installer::{Archiver, Fetcher, FsRemover, Installer, Remover, TarArchiver};
use crate::types::{RollbackOutcome, SwitchReport, SwitchState, VersionSpec};
use crate::versions::{GoVersionProbe, VersionProbe, Versions};
use reqwest::Client;
use std::path::PathBuf;

pub struct Switcher {
    config: Config,
    probe: Box<dyn VersionProbe>,
    remover: Box<dyn Remover>,
    fetcher: Box<dyn Fetcher>,
    archiver: Box<dyn Archiver>,
    env: Box<dyn EnvStore>,
    state: SwitchState,
}

impl Switcher {
    pub fn new(
        config: Config,
        probe: Box<dyn VersionProbe>,
        remover: Box<dyn Remover>,
        fetcher: Box<dyn Fetcher>,
        archiver: Box<dyn Archiver>,
        env: Box<dyn EnvStore>,
    ) -> Self {
        Self {
            config,
            probe,
            remover,
            fetcher,
            archiver,
            env,
            state: SwitchState::Idle,
        }
    }

    pub fn from_config(config: Config) -> Result<Self, EnvError> {
        let env = SessionEnvStore::load(&config.state_file)?;
        let probe = GoVersionProbe::new(config.go_binary.clone());

        Ok(Self::new(
            config,
            Box::new(probe),
            Box::new(FsRemover),
            Box::new(HttpFetcher::with_client(Client::new())),
            Box::new(TarArchiver),
            Box::new(env),
        ))
    }

    fn transition(&mut self, next: SwitchState) {
        log::debug!("Switch state: {} -> {}", self.state, next);
        self.state = next;
    }

    fn abort(&mut self, err: SwitchError) -> SwitchError {
        log::debug!("Switch aborted while {}: {err}", self.state);
        self.transition(SwitchState::Aborted);
        err
    }

    pub async fn use_version(&mut self, spec: &VersionSpec) -> Result<SwitchReport, SwitchError> {
        self.state = SwitchState::Idle;
        self.transition(SwitchState::Validating);
        if let Err(err) = Versions::validate(spec) {
            return Err(self.abort(err.into()));
        }

        self.transition(SwitchState::Probing);
        let previous = match self.probe.current_version().await {
            Ok(current) => {
                log::info!("Current Go version is {current}");
                if let Err(err) = self.env.set(ROLLBACK_VERSION_VAR, &current) {
                    return Err(self.abort(err.into()));
                }
                Some(current)
            }
            Err(err) => {
                log::info!("No current Go version detected: {err}");
                println!("No current Go version installed.");
                None
            }
        };

        self.transition(SwitchState::Removing);
        let existing = self.existing_root();
        log::info!("Removing existing installation at {}", existing.display());
        if let Err(source) = self.remover.remove(&existing).await {
            return Err(self.abort(SwitchError::Removal {
                path: existing,
                source,
            }));
        }

        self.transition(SwitchState::Installing);
        if let Err(err) = self.install(spec).await {
            return Err(self.abort(err));
        }

        self.transition(SwitchState::UpdatingEnv);
        if let Err(err) = self.update_environment() {
            return Err(self.abort(err));
        }

        self.transition(SwitchState::Done);
        Ok(SwitchReport {
            version: spec.version.to_string(),
            previous,
        })
    }

    /// Reinstalls the version held in the rollback slot; the slot itself is left untouched.
    pub async fn rollback(&mut self) -> Result<RollbackOutcome, SwitchError> {
        self.state = SwitchState::Idle;
        let Some(version) = self.env.get(ROLLBACK_VERSION_VAR) else {
            log::info!("Rollback slot {ROLLBACK_VERSION_VAR} is empty");
            return Ok(RollbackOutcome::NothingToRollBack);
        };

        log::info!("Rolling back to Go {version}");
        self.transition(SwitchState::Installing);
        if let Err(err) = self.install(&VersionSpec::stable(version.to_string())).await {
            return Err(self.abort(err));
        }

        self.transition(SwitchState::UpdatingEnv);
        if let Err(err) = self.update_environment() {
            return Err(self.abort(err));
        }

        self.transition(SwitchState::Done);
        Ok(RollbackOutcome::RolledBack(version))
    }

    pub async fn current_version(&self) -> Option<String> {
        self.probe
            .current_version()
            .await
            .map_err(|err| log::info!("No current Go version detected: {err}"))
            .ok()
    }

    fn existing_root(&self) -> PathBuf {
        self.env
            .get(GOROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.install_root())
    }

    async fn install(&self, spec: &VersionSpec) -> Result<(), SwitchError> {
        Installer::install_version(
            &self.config,
            self.fetcher.as_ref(),
            self.archiver.as_ref(),
            spec,
        )
        .await?;
        Ok(())
    }

    fn update_environment(&mut self) -> Result<(), SwitchError> {
        env_store::update_environment(
            self.env.as_mut(),
            &self.config.install_root(),
            &self.config.bin_dir(),
        )?;
        Ok(())
    }
}

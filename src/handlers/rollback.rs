use crate::command_handler::{expect_no_more, Args, CommandHandler};
use crate::config::Config;
use crate::constants::ROLLBACK_VERSION_VAR;
use crate::errors::{CommandError, ParseError, SwitchError};
use crate::switcher::Switcher;
use crate::types::RollbackOutcome;
use async_trait::async_trait;

/// Takes no positional arguments; the target comes from the rollback slot.
pub struct RollbackHandler;

impl RollbackHandler {
    pub async fn run(switcher: &mut Switcher) -> Result<RollbackOutcome, SwitchError> {
        let outcome = switcher.rollback().await?;

        match &outcome {
            RollbackOutcome::NothingToRollBack => println!(
                "No rollback version set ({ROLLBACK_VERSION_VAR} is empty). Use 'gov use <version>' to install a version."
            ),
            RollbackOutcome::RolledBack(version) => println!("Rolled back to Go version {version}"),
        }

        Ok(outcome)
    }
}

#[async_trait]
impl CommandHandler for RollbackHandler {
    fn parse(&mut self, args: Args<'_>) -> Result<(), ParseError> {
        expect_no_more("rollback", args)
    }

    async fn execute(&mut self, config: Config) -> Result<(), CommandError> {
        let mut switcher = Switcher::from_config(config)?;
        Self::run(&mut switcher).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_store::SessionEnvStore;
    use crate::http::HttpFetcher;
    use crate::installer::{FsRemover, TarArchiver};
    use crate::versions::GoVersionProbe;
    use std::path::PathBuf;

    #[test]
    fn accepts_no_arguments() {
        let mut none = std::iter::empty::<String>();
        assert!(RollbackHandler.parse(&mut none).is_ok());

        let mut one = std::iter::once("1.20.0".to_string());
        assert!(matches!(
            RollbackHandler.parse(&mut one),
            Err(ParseError::UnexpectedArgument { command: "rollback", .. })
        ));
    }

    #[tokio::test]
    async fn empty_slot_is_a_clean_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let state_file = dir.path().join("env.json");
        let config = Config {
            install_parent: dir.path().join("local"),
            download_dir: dir.path().to_path_buf(),
            state_file: state_file.clone(),
            ..Config::default()
        };
        let env = SessionEnvStore::load_with(&state_file, Vec::new()).unwrap();
        let mut switcher = Switcher::new(
            config,
            Box::new(GoVersionProbe::new(PathBuf::from("go"))),
            Box::new(FsRemover),
            Box::new(HttpFetcher::with_client(reqwest::Client::new())),
            Box::new(TarArchiver),
            Box::new(env),
        );

        let outcome = RollbackHandler::run(&mut switcher).await.unwrap();

        assert_eq!(outcome, RollbackOutcome::NothingToRollBack);
        assert!(!state_file.exists());
        assert!(!dir.path().join("local").exists());
    }
}

use crate::command_handler::{expect_no_more, Args, CommandHandler};
use crate::config::Config;
use crate::constants::{GOROOT_VAR, PATH_VAR, ROLLBACK_VERSION_VAR};
use crate::env_store::{EnvStore, SessionEnvStore};
use crate::errors::{CommandError, ParseError};
use async_trait::async_trait;

const EXPORTED: [&str; 3] = [GOROOT_VAR, PATH_VAR, ROLLBACK_VERSION_VAR];

/// Prints `export` lines so a shell can pick up what `gov` changed: `eval "$(gov env)"`.
pub struct EnvHandler;

impl EnvHandler {
    pub fn render(store: &dyn EnvStore) -> String {
        EXPORTED
            .iter()
            .filter_map(|key| store.get(key).map(|value| format!("export {key}={}", quote(&value))))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[async_trait]
impl CommandHandler for EnvHandler {
    fn parse(&mut self, args: Args<'_>) -> Result<(), ParseError> {
        expect_no_more("env", args)
    }

    async fn execute(&mut self, config: Config) -> Result<(), CommandError> {
        let store = SessionEnvStore::load(&config.state_file)?;
        let exports = Self::render(&store);

        if !exports.is_empty() {
            println!("{exports}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_store::MemoryEnvStore;
    use maplit::hashmap;

    #[test]
    fn renders_only_present_variables() {
        let store = MemoryEnvStore::with_vars(hashmap! {
            "GOROOT" => "/usr/local/go",
            "PATH" => "/usr/local/go/bin:/usr/bin",
            "UNRELATED" => "x",
        });

        assert_eq!(
            EnvHandler::render(&store),
            "export GOROOT='/usr/local/go'\nexport PATH='/usr/local/go/bin:/usr/bin'"
        );
    }

    #[test]
    fn single_quotes_are_escaped() {
        let store = MemoryEnvStore::with_vars(hashmap! { "GO_ROLLBACK_VERSION" => "it's" });

        assert_eq!(
            EnvHandler::render(&store),
            r"export GO_ROLLBACK_VERSION='it'\''s'"
        );
    }
}

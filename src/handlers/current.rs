use crate::command_handler::{expect_no_more, Args, CommandHandler};
use crate::config::Config;
use crate::errors::{CommandError, ParseError};
use crate::switcher::Switcher;
use async_trait::async_trait;

pub struct CurrentHandler;

#[async_trait]
impl CommandHandler for CurrentHandler {
    fn parse(&mut self, args: Args<'_>) -> Result<(), ParseError> {
        expect_no_more("current", args)
    }

    async fn execute(&mut self, config: Config) -> Result<(), CommandError> {
        let switcher = Switcher::from_config(config)?;

        match switcher.current_version().await {
            Some(version) => println!("{version}"),
            None => println!("No current Go version installed."),
        }

        Ok(())
    }
}

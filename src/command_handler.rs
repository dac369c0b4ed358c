use crate::config::Config;
use crate::errors::{CommandError, ParseError};
use crate::handlers::current::CurrentHandler;
use crate::handlers::env::EnvHandler;
use crate::handlers::rollback::RollbackHandler;
use crate::handlers::use_version::UseHandler;
use async_trait::async_trait;

pub type Args<'a> = &'a mut dyn Iterator<Item = String>;

pub const USAGE: &str = "\
gov is a CLI utility to manage Go installations

Usage:
  gov use <version> [--rc]   Switch to a Go version, replacing the current installation
  gov rollback               Reinstall the version that was active before the last switch
  gov current                Print the installed Go version
  gov env                    Print shell exports for the managed variables
  gov help                   Show this message";

#[async_trait]
pub trait CommandHandler {
    fn parse(&mut self, args: Args<'_>) -> Result<(), ParseError>;
    async fn execute(&mut self, config: Config) -> Result<(), CommandError>;
}

pub fn handler_for(command: &str) -> Result<Option<Box<dyn CommandHandler>>, ParseError> {
    let handler: Box<dyn CommandHandler> = match command.to_lowercase().as_str() {
        "use" => Box::new(UseHandler::default()),
        "rollback" => Box::new(RollbackHandler),
        "current" => Box::new(CurrentHandler),
        "env" => Box::new(EnvHandler),
        "help" | "-h" | "--help" => return Ok(None),
        _ => return Err(ParseError::CommandNotFound(command.to_string())),
    };

    Ok(Some(handler))
}

/// Rejects anything left over once a handler has taken what it needs.
pub fn expect_no_more(command: &'static str, args: Args<'_>) -> Result<(), ParseError> {
    match args.next() {
        Some(flag) if flag.starts_with('-') => Err(ParseError::UnknownFlag { command, flag }),
        Some(argument) => Err(ParseError::UnexpectedArgument { command, argument }),
        None => Ok(()),
    }
}

pub async fn handle_args<I>(args: I, config: Config) -> Result<(), CommandError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().skip(1);

    let command = match args.next() {
        Some(c) => c,
        None => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let mut command_handler = match handler_for(&command)? {
        Some(handler) => handler,
        None => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    command_handler.parse(&mut args)?;
    command_handler.execute(config).await
}

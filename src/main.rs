mod command_handler;
mod config;
mod constants;
mod env_store;
mod errors;
mod handlers;
mod http;
mod installer;
mod logging;
mod switcher;
mod types;
mod utils;
mod versions;

use config::Config;
use errors::CommandError;
use std::env;
use std::process::ExitCode;

fn exit_status(result: Result<(), CommandError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            // Printed directly so it survives GOV_LOG=off.
            eprintln!("{err}");
            1
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    logging::init_logging(config.log_level);

    ExitCode::from(exit_status(
        command_handler::handle_args(env::args(), config).await,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use errors::ParseError;

    #[test]
    fn failures_map_to_a_non_zero_exit() {
        assert_eq!(exit_status(Ok(())), 0);

        let err = CommandError::Parse(ParseError::CommandNotFound("frobnicate".to_string()));
        assert_eq!(exit_status(Err(err)), 1);
    }
}

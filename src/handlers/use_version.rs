use crate::command_handler::{Args, CommandHandler};
use crate::config::Config;
use crate::errors::{CommandError, ParseError};
use crate::switcher::Switcher;
use crate::types::VersionSpec;
use async_trait::async_trait;

#[derive(Default)]
pub struct UseHandler {
    version: String,
    release_candidate: bool,
}

#[async_trait]
impl CommandHandler for UseHandler {
    fn parse(&mut self, args: Args<'_>) -> Result<(), ParseError> {
        let mut version = None;

        for arg in args {
            if arg == "--rc" {
                self.release_candidate = true;
            } else if arg.starts_with('-') {
                return Err(ParseError::UnknownFlag {
                    command: "use",
                    flag: arg,
                });
            } else if version.is_none() {
                version = Some(arg);
            } else {
                return Err(ParseError::UnexpectedArgument {
                    command: "use",
                    argument: arg,
                });
            }
        }

        self.version = version.ok_or(ParseError::MissingArgument(String::from("version")))?;
        Ok(())
    }

    async fn execute(&mut self, config: Config) -> Result<(), CommandError> {
        let spec = VersionSpec::new(self.version.to_string(), self.release_candidate);
        let mut switcher = Switcher::from_config(config)?;

        let report = switcher.use_version(&spec).await?;
        if let Some(previous) = report.previous {
            log::info!("Saved {previous} as the rollback version");
        }

        println!("Switched to Go version {}", report.version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &[&str]) -> Result<UseHandler, ParseError> {
        let mut handler = UseHandler::default();
        let mut args = raw.iter().map(|s| s.to_string());
        handler.parse(&mut args)?;
        Ok(handler)
    }

    #[test]
    fn parses_version_and_rc_flag_in_any_order() {
        let handler = parse(&["1.21.0"]).unwrap();
        assert_eq!(handler.version, "1.21.0");
        assert!(!handler.release_candidate);

        let handler = parse(&["--rc", "1.22"]).unwrap();
        assert_eq!(handler.version, "1.22");
        assert!(handler.release_candidate);

        let handler = parse(&["1.22", "--rc"]).unwrap();
        assert!(handler.release_candidate);
    }

    #[test]
    fn version_is_required() {
        assert!(matches!(parse(&[]), Err(ParseError::MissingArgument(_))));
        assert!(matches!(parse(&["--rc"]), Err(ParseError::MissingArgument(_))));
    }

    #[test]
    fn extra_arguments_and_unknown_flags_are_rejected() {
        assert!(matches!(
            parse(&["1.21.0", "1.20.0"]),
            Err(ParseError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse(&["1.21.0", "--beta"]),
            Err(ParseError::UnknownFlag { ref flag, .. }) if flag == "--beta"
        ));
    }
}

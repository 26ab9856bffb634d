use anyhow::Error;
use contactbook_config::ConfigError;
use contactbook_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const ENTER_USER_NAME: &str = "Enter user name.";

/// Failure of a single command. Never ends the session.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum CommandError {
    #[error("contact not found")]
    NotFound,
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("missing argument")]
    MissingArgument,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Invalid(err.to_string())
    }
}

pub fn invalid_input(message: impl Into<String>) -> CommandError {
    CommandError::Invalid(message.into())
}

/// The line shown to the user for a failed command.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::NotFound => CONTACT_NOT_FOUND.to_string(),
        CommandError::Invalid(message) => message.clone(),
        CommandError::MissingArgument => ENTER_USER_NAME.to_string(),
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidUpcomingDays(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

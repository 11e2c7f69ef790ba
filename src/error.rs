use thiserror::Error;

use crate::core::commands::CommandError;
use crate::input::InputError;
use crate::process::ProcessError;

pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_error_display() {
        let errors = vec![
            ShellError::from(InputError::Closed),
            ShellError::from(std::io::Error::new(std::io::ErrorKind::Other, "io error")),
            ShellError::from(CommandError::MissingArgument("type")),
            ShellError::from(ProcessError::Abandoned),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
        assert_eq!(
            ShellError::from(CommandError::MissingArgument("type")).to_string(),
            "type: missing argument"
        );
    }
}

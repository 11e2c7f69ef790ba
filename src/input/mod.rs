use async_trait::async_trait;
use thiserror::Error;

mod completer;
pub mod reader;

pub use completer::ShellCompleter;
pub use reader::RustylineSource;

/// One result of asking the terminal for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C while editing; the partial line is discarded.
    Interrupted,
    Eof,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Readline error: {0}")]
    Readline(String),
    #[error("line reader stopped")]
    Closed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rustyline::error::ReadlineError> for InputError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        InputError::Readline(err.to_string())
    }
}

/// Source of completed input lines. Renders `prompt` before each read.
#[async_trait]
pub trait LineSource {
    async fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, InputError>;
}

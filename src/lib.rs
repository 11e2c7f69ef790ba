pub mod config;
pub mod error;
pub mod flags;
pub mod parser;
pub mod shell;

pub mod core;
pub mod input;
pub mod path;
pub mod process;

pub use error::{ShellError, ShellResult};
pub use shell::Shell;

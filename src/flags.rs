use clap::Parser;

use crate::config::DEFAULT_HISTORY_SIZE;

/// marrow - a minimal interactive command interpreter
#[derive(Parser, Debug, Clone)]
#[command(name = "marrow", version, about)]
pub struct Flags {
    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Number of lines kept in the in-memory history
    #[arg(long, env = "MARROW_HISTORY_SIZE", default_value_t = DEFAULT_HISTORY_SIZE)]
    pub history_size: usize,

    /// Disable tab completion of commands and file names
    #[arg(long)]
    pub no_completion: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            quiet: false,
            debug: false,
            history_size: DEFAULT_HISTORY_SIZE,
            no_completion: false,
        }
    }
}

impl Flags {
    /// Log filter used when `MARROW_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

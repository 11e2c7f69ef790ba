use crate::flags::Flags;

pub const DEFAULT_PROMPT: &str = "$ ";
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Runtime settings for a shell session. Nothing is read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub history_size: usize,
    pub completion: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_size: DEFAULT_HISTORY_SIZE,
            completion: true,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            history_size: flags.history_size,
            completion: !flags.no_completion,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_flags() {
        let flags = Flags {
            history_size: 10,
            no_completion: true,
            ..Flags::default()
        };
        let config = ShellConfig::from_flags(&flags);

        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.history_size, 10);
        assert!(!config.completion);
    }

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert!(config.completion);
    }
}

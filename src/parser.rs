/// A single input line split into a command name and its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    command: String,
    args: Vec<String>,
}

impl ParsedCommand {
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// True when the line held nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Splits `line` on runs of whitespace. No quoting or escaping is recognised.
pub fn parse(line: &str) -> ParsedCommand {
    let mut words = line.split_whitespace().map(str::to_owned);

    match words.next() {
        Some(command) => ParsedCommand {
            command,
            args: words.collect(),
        },
        None => ParsedCommand::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collapses_whitespace() {
        let parsed = parse("echo   hello   world");
        assert_eq!(parsed.command(), "echo");
        assert_eq!(parsed.args(), &["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_parse_trims_line() {
        let parsed = parse("  \tls -la /tmp \n");
        assert_eq!(parsed.command(), "ls");
        assert_eq!(parsed.args(), &["-la".to_string(), "/tmp".to_string()]);
    }

    #[test]
    fn test_parse_blank_lines() {
        for line in ["", " ", "\t\t", "   \n"] {
            let parsed = parse(line);
            assert!(parsed.is_empty());
            assert!(parsed.args().is_empty());
        }
    }

    #[test]
    fn test_parse_keeps_quotes_literal() {
        let parsed = parse("echo 'a b'");
        assert_eq!(parsed.args(), &["'a".to_string(), "b'".to_string()]);
    }

    #[test]
    fn test_parse_command_without_args() {
        let parsed = parse("exit");
        assert_eq!(parsed.command(), "exit");
        assert!(parsed.args().is_empty());
    }
}

use super::{Command, CommandContext, CommandError, Outcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Outcome, CommandError> {
        writeln!(ctx.out, "{}", args.join(" "))?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::commands::tests::run_builtin;
    use crate::core::commands::{Builtin, Outcome};
    use crate::path::Resolver;

    #[test]
    fn test_echo_joins_args() {
        let resolver = Resolver::with_search_path("");
        let (result, out) = run_builtin(Builtin::Echo, &["hello", "world"], &resolver);
        assert_eq!(result.unwrap(), Outcome::Continue);
        assert_eq!(out, "hello world\n");
    }

    #[test]
    fn test_echo_without_args() {
        let resolver = Resolver::with_search_path("");
        let (_, out) = run_builtin(Builtin::Echo, &[], &resolver);
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_echo_is_literal() {
        let resolver = Resolver::with_search_path("");
        let (_, out) = run_builtin(Builtin::Echo, &["a\\nb", "$HOME"], &resolver);
        assert_eq!(out, "a\\nb $HOME\n");
    }
}

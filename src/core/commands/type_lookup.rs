use super::{Command, CommandContext, CommandError, Outcome};

/// `type NAME`: reports whether NAME is a builtin or where it lives on PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCommand;

impl Command for TypeCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Outcome, CommandError> {
        let target = args
            .first()
            .ok_or(CommandError::MissingArgument("type"))?;

        if ctx.resolver.builtins().contains(target) {
            writeln!(ctx.out, "{} is a shell builtin", target)?;
            return Ok(Outcome::Continue);
        }

        match ctx.resolver.find_in_path(target) {
            Some(path) => writeln!(ctx.out, "{} is {}", target, path.display())?,
            None => writeln!(ctx.out, "{}: not found", target)?,
        }
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::commands::tests::run_builtin;
    use crate::core::commands::{Builtin, CommandError};
    use crate::path::resolver::tests::{search_path_of, write_executable};
    use crate::path::Resolver;

    #[test]
    fn test_type_builtins() {
        let resolver = Resolver::with_search_path("");
        let (_, out) = run_builtin(Builtin::Type, &["echo"], &resolver);
        assert_eq!(out, "echo is a shell builtin\n");

        let (_, out) = run_builtin(Builtin::Type, &["exit"], &resolver);
        assert_eq!(out, "exit is a shell builtin\n");

        let (_, out) = run_builtin(Builtin::Type, &["type"], &resolver);
        assert_eq!(out, "type is a shell builtin\n");
    }

    #[test]
    fn test_type_finds_executable() {
        let dir = tempfile::tempdir().unwrap();
        let ls = write_executable(dir.path(), "ls");
        let resolver = Resolver::with_search_path(search_path_of(&[dir.path()]));

        let (_, out) = run_builtin(Builtin::Type, &["ls"], &resolver);
        assert_eq!(out, format!("ls is {}\n", ls.display()));
    }

    #[test]
    fn test_type_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = Resolver::with_search_path(search_path_of(&[dir.path()]));

        let (result, out) = run_builtin(Builtin::Type, &["nonexistent_cmd_xyz"], &resolver);
        assert!(result.is_ok());
        assert_eq!(out, "nonexistent_cmd_xyz: not found\n");
    }

    #[test]
    fn test_type_uses_first_argument_only() {
        let resolver = Resolver::with_search_path("");
        let (_, out) = run_builtin(Builtin::Type, &["echo", "nonexistent_cmd_xyz"], &resolver);
        assert_eq!(out, "echo is a shell builtin\n");
    }

    #[test]
    fn test_type_missing_argument() {
        let resolver = Resolver::with_search_path("");
        let (result, out) = run_builtin(Builtin::Type, &[], &resolver);
        assert!(matches!(result, Err(CommandError::MissingArgument("type"))));
        assert!(out.is_empty());
    }
}

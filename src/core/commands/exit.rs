use super::{Command, CommandContext, CommandError, Outcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    // A numeric status argument is ignored; the shell always leaves with 0.
    fn execute(
        &self,
        args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<Outcome, CommandError> {
        if !args.is_empty() {
            tracing::debug!(?args, "exit arguments ignored");
        }
        Ok(Outcome::Exit(0))
    }
}

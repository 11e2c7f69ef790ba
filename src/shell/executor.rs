use std::io::Write;
use std::path::{Path, PathBuf};

use super::Shell;
use crate::{
    core::{
        commands::{Builtin, Command, CommandContext, CommandError, Outcome},
        ShellState,
    },
    error::ShellError,
    input::LineSource,
    parser::{self, ParsedCommand},
    path::Resolution,
    process::ProcessLauncher,
};

impl<L, P, W> Shell<L, P, W>
where
    L: LineSource,
    P: ProcessLauncher,
    W: Write,
{
    /// Parses and dispatches one line. External commands are awaited here,
    /// so the caller only prompts again once they have terminated.
    pub(crate) async fn execute_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        self.transition(ShellState::Parsing);
        let parsed = parser::parse(line);
        if parsed.is_empty() {
            return Ok(Outcome::Continue);
        }

        self.transition(ShellState::Dispatching);
        let resolution = self.resolver.resolve(parsed.command());
        tracing::debug!(command = parsed.command(), ?resolution, "dispatching");

        match resolution {
            Resolution::Builtin(builtin) => self.run_builtin(builtin, &parsed),
            Resolution::Executable(path) => {
                self.run_external(&path, &parsed).await?;
                Ok(Outcome::Continue)
            }
            Resolution::NotFound if Path::new(parsed.command()).is_absolute() => {
                let path = PathBuf::from(parsed.command());
                self.run_external(&path, &parsed).await?;
                Ok(Outcome::Continue)
            }
            Resolution::NotFound => {
                self.report_not_found(parsed.command())?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn run_builtin(
        &mut self,
        builtin: Builtin,
        parsed: &ParsedCommand,
    ) -> Result<Outcome, ShellError> {
        let result = {
            let mut ctx = CommandContext {
                out: &mut self.out,
                resolver: &self.resolver,
            };
            builtin.execute(parsed.args(), &mut ctx)
        };

        match result {
            Err(err @ CommandError::MissingArgument(_)) => {
                writeln!(self.out, "{}", err)?;
                Ok(Outcome::Continue)
            }
            result => Ok(result?),
        }
    }

    async fn run_external(
        &mut self,
        program: &Path,
        parsed: &ParsedCommand,
    ) -> Result<(), ShellError> {
        let command = parsed.command();
        // Anything buffered must reach the terminal before the child writes.
        self.out.flush()?;

        let process = match self.launcher.launch(program, command, parsed.args()) {
            Ok(process) => process,
            Err(e) => {
                tracing::debug!(command, error = %e, "launch failed");
                return self.report_not_found(command);
            }
        };

        match process.wait().await {
            Ok(termination) if termination.success() => {
                tracing::debug!(command, "process finished");
            }
            Ok(termination) => {
                tracing::debug!(command, %termination, "process finished unsuccessfully");
            }
            Err(e) => {
                tracing::warn!(command, error = %e, "lost track of process");
            }
        }
        Ok(())
    }

    fn report_not_found(&mut self, command: &str) -> Result<(), ShellError> {
        writeln!(self.out, "{}: command not found", command)?;
        Ok(())
    }
}

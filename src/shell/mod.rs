use std::io::Write;

use tokio::sync::watch;

mod executor;

use crate::{
    config::ShellConfig,
    core::{commands::Outcome, ShellState},
    error::ShellError,
    input::{LineSource, ReadOutcome},
    path::Resolver,
    process::ProcessLauncher,
};

/// One interactive session: line source, launcher, output and loop state.
pub struct Shell<L, P, W> {
    source: L,
    launcher: P,
    out: W,
    resolver: Resolver,
    config: ShellConfig,
    state: watch::Sender<ShellState>,
}

impl<L, P, W> Shell<L, P, W>
where
    L: LineSource,
    P: ProcessLauncher,
    W: Write,
{
    pub fn new(source: L, launcher: P, out: W, resolver: Resolver, config: ShellConfig) -> Self {
        let (state, _) = watch::channel(ShellState::Idle);
        Shell {
            source,
            launcher,
            out,
            resolver,
            config,
            state,
        }
    }

    pub fn state(&self) -> ShellState {
        *self.state.borrow()
    }

    /// Observe state transitions while [`Shell::run`] is in progress.
    pub fn subscribe(&self) -> watch::Receiver<ShellState> {
        self.state.subscribe()
    }

    fn transition(&self, next: ShellState) {
        let previous = self.state.send_replace(next);
        tracing::trace!(?previous, ?next, "state");
    }

    /// Runs until `exit`, end of input, or a fatal input error.
    ///
    /// Returns the status the process should exit with.
    pub async fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            self.transition(ShellState::Idle);
            self.out.flush()?;

            let line = match self.source.read_line(&self.config.prompt).await {
                Ok(ReadOutcome::Line(line)) => line,
                Ok(ReadOutcome::Interrupted) => continue,
                Ok(ReadOutcome::Eof) => {
                    tracing::debug!("end of input");
                    writeln!(self.out)?;
                    self.out.flush()?;
                    self.transition(ShellState::Terminated);
                    return Ok(0);
                }
                Err(e) => {
                    self.transition(ShellState::Terminated);
                    return Err(e.into());
                }
            };

            match self.execute_line(&line).await {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Exit(code)) => {
                    self.out.flush()?;
                    self.transition(ShellState::Terminated);
                    return Ok(code);
                }
                Err(e) => {
                    tracing::debug!(error = %e, line = %line, "dispatch failed");
                    writeln!(self.out, "Error: {}", e)?;
                }
            }
        }
    }
}

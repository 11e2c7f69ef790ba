use std::fmt;
use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::sync::oneshot;

pub mod executor;
pub mod signal;

pub use executor::OsLauncher;

/// The OS refused to start a program.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no such program: {0}")]
    NotFound(String),
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A started process could not be waited on.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to wait for process: {0}")]
    Wait(#[from] std::io::Error),
    #[error("process completion was never reported")]
    Abandoned,
    #[error("signal handler error: {0}")]
    Signal(String),
}

impl From<ctrlc::Error> for ProcessError {
    fn from(err: ctrlc::Error) -> Self {
        ProcessError::Signal(err.to_string())
    }
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl Termination {
    pub fn success(self) -> bool {
        self == Termination::Exited(0)
    }
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        match (status.code(), status.signal()) {
            (Some(code), _) => Termination::Exited(code),
            (None, Some(signal)) => Termination::Signaled(signal),
            (None, None) => Termination::Exited(-1),
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "exit status {}", code),
            Termination::Signaled(signal) => write!(f, "signal {}", signal),
        }
    }
}

/// Handle to a launched process; resolves once the process has terminated.
#[derive(Debug)]
pub struct RunningProcess {
    pid: Option<u32>,
    completion: oneshot::Receiver<Result<Termination, ProcessError>>,
}

impl RunningProcess {
    pub fn new(
        pid: Option<u32>,
        completion: oneshot::Receiver<Result<Termination, ProcessError>>,
    ) -> Self {
        Self { pid, completion }
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    pub async fn wait(self) -> Result<Termination, ProcessError> {
        self.completion
            .await
            .map_err(|_| ProcessError::Abandoned)?
    }
}

/// Starts external programs with the shell's standard streams.
pub trait ProcessLauncher {
    /// `program` is the file to execute, `name` becomes `argv[0]`.
    fn launch(
        &self,
        program: &Path,
        name: &str,
        args: &[String],
    ) -> Result<RunningProcess, LaunchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_termination_from_status() {
        assert_eq!(
            Termination::from(ExitStatus::from_raw(0)),
            Termination::Exited(0)
        );
        assert_eq!(
            Termination::from(ExitStatus::from_raw(3 << 8)),
            Termination::Exited(3)
        );
        assert_eq!(
            Termination::from(ExitStatus::from_raw(libc::SIGKILL)),
            Termination::Signaled(libc::SIGKILL)
        );
        assert!(Termination::Exited(0).success());
        assert!(!Termination::Exited(1).success());
    }

    #[tokio::test]
    async fn test_running_process_reports_completion() {
        let (tx, rx) = oneshot::channel();
        let process = RunningProcess::new(Some(42), rx);
        assert_eq!(process.pid(), Some(42));

        tx.send(Ok(Termination::Exited(7))).unwrap();
        assert_eq!(process.wait().await.unwrap(), Termination::Exited(7));
    }

    #[tokio::test]
    async fn test_running_process_abandoned() {
        let (tx, rx) = oneshot::channel();
        drop(tx);
        let result = RunningProcess::new(None, rx).wait().await;
        assert!(matches!(result, Err(ProcessError::Abandoned)));
    }
}

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tokio::sync::oneshot;

use super::{LaunchError, ProcessError, ProcessLauncher, RunningProcess, Termination};

/// Spawns real processes on the tokio runtime.
///
/// The child inherits stdin, stdout and stderr. A background task waits on
/// it and reports through the returned [`RunningProcess`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsLauncher;

impl OsLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for OsLauncher {
    fn launch(
        &self,
        program: &Path,
        name: &str,
        args: &[String],
    ) -> Result<RunningProcess, LaunchError> {
        let mut command = Command::new(program);
        command
            .arg0(name)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LaunchError::NotFound(name.to_string())
            } else {
                LaunchError::Spawn {
                    program: program.display().to_string(),
                    source: e,
                }
            }
        })?;

        let pid = child.id();
        tracing::debug!(?pid, program = %program.display(), "process started");

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = child
                .wait()
                .await
                .map(Termination::from)
                .map_err(ProcessError::from);
            // The receiver only disappears if the shell stopped waiting.
            let _ = tx.send(result);
        });

        Ok(RunningProcess::new(pid, rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_launch_reports_exit_code() {
        let launcher = OsLauncher::new();
        let process = launcher
            .launch(
                Path::new("/bin/sh"),
                "sh",
                &["-c".to_string(), "exit 3".to_string()],
            )
            .unwrap();

        assert!(process.pid().is_some());
        assert_eq!(process.wait().await.unwrap(), Termination::Exited(3));
    }

    #[tokio::test]
    async fn test_launch_reports_signal() {
        let launcher = OsLauncher::new();
        let process = launcher
            .launch(
                Path::new("/bin/sh"),
                "sh",
                &["-c".to_string(), "kill -9 $$".to_string()],
            )
            .unwrap();

        assert_eq!(
            process.wait().await.unwrap(),
            Termination::Signaled(libc::SIGKILL)
        );
    }

    #[tokio::test]
    async fn test_launch_missing_program() {
        let launcher = OsLauncher::new();
        let missing = PathBuf::from("/nonexistent/dir/program");
        let result = launcher.launch(&missing, "program", &[]);

        assert!(matches!(result, Err(LaunchError::NotFound(name)) if name == "program"));
    }

    #[tokio::test]
    async fn test_launch_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = OsLauncher::new().launch(dir.path(), "dir", &[]);
        assert!(result.is_err());
    }
}

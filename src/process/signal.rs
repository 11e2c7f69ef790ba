use crate::process::ProcessError;

/// Keeps the shell alive when Ctrl-C reaches the whole foreground group.
///
/// The running child still receives SIGINT and decides for itself.
pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    ctrlc::set_handler(|| {
        tracing::trace!("SIGINT received by shell");
    })?;
    Ok(())
}

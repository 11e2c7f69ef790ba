/// Where the read-dispatch loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Prompt shown, waiting for a line.
    Idle,
    Parsing,
    /// Running a builtin or waiting for an external process to end.
    Dispatching,
    Terminated,
}

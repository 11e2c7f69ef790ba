use std::sync::mpsc as std_mpsc;
use std::thread;

use async_trait::async_trait;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tokio::sync::mpsc;

use super::{InputError, LineSource, ReadOutcome, ShellCompleter};
use crate::config::ShellConfig;
use crate::path::Resolver;

type ReadResult = Result<ReadOutcome, InputError>;

/// Terminal line source backed by rustyline.
///
/// The editor blocks on the terminal, so it lives on its own thread and reads
/// only when [`LineSource::read_line`] asks for a line. Keystrokes typed
/// before that stay in the terminal buffer.
pub struct RustylineSource {
    requests: mpsc::Sender<String>,
    responses: mpsc::Receiver<ReadResult>,
}

impl RustylineSource {
    pub fn spawn(config: &ShellConfig, resolver: Resolver) -> Result<Self, InputError> {
        let (request_tx, mut request_rx) = mpsc::channel::<String>(1);
        let (response_tx, response_rx) = mpsc::channel::<ReadResult>(1);
        let (ready_tx, ready_rx) = std_mpsc::channel::<Result<(), InputError>>();

        let history_size = config.history_size;
        let completer = config.completion.then(|| ShellCompleter::new(resolver));

        thread::Builder::new()
            .name("line-reader".to_string())
            .spawn(move || {
                let mut editor = match build_editor(history_size, completer) {
                    Ok(editor) => {
                        let _ = ready_tx.send(Ok(()));
                        editor
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };

                while let Some(prompt) = request_rx.blocking_recv() {
                    let outcome = match editor.readline(&prompt) {
                        Ok(line) => Ok(ReadOutcome::Line(line)),
                        Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
                        Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
                        Err(e) => Err(InputError::from(e)),
                    };
                    if response_tx.blocking_send(outcome).is_err() {
                        break;
                    }
                }
                tracing::debug!("line reader finished");
            })?;

        ready_rx.recv().map_err(|_| InputError::Closed)??;

        Ok(Self {
            requests: request_tx,
            responses: response_rx,
        })
    }
}

fn build_editor(
    history_size: usize,
    completer: Option<ShellCompleter>,
) -> Result<Editor<ShellCompleter, DefaultHistory>, InputError> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .max_history_size(history_size)?
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();

    let mut editor = Editor::with_config(config)?;
    editor.set_helper(completer);
    Ok(editor)
}

#[async_trait]
impl LineSource for RustylineSource {
    async fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, InputError> {
        self.requests
            .send(prompt.to_string())
            .await
            .map_err(|_| InputError::Closed)?;
        self.responses.recv().await.ok_or(InputError::Closed)?
    }
}

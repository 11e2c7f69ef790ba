use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

mod command;

use command::CommandCompleter;
use crate::path::Resolver;

/// rustyline helper: command names for the first word, file names after it.
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: FilenameCompleter,
}

impl ShellCompleter {
    pub fn new(resolver: Resolver) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(resolver),
            path_completer: FilenameCompleter::new(),
        }
    }
}

impl Helper for ShellCompleter {}
impl Highlighter for ShellCompleter {}
impl Hinter for ShellCompleter {
    type Hint = String;
}
impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let word_start = line_up_to_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let is_command_word = line_up_to_cursor[..word_start].trim().is_empty();

        if is_command_word {
            let word = &line_up_to_cursor[word_start..];
            Ok((word_start, self.command_completer.complete_command(word)))
        } else {
            self.path_completer.complete(line, pos, ctx)
        }
    }
}

use rustyline::completion::Pair;

use crate::path::Resolver;

/// Completes the command word from builtins and executables on PATH.
#[derive(Debug, Clone)]
pub struct CommandCompleter {
    resolver: Resolver,
}

impl CommandCompleter {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.resolver
            .commands_with_prefix(input)
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect()
    }
}

use std::collections::BTreeMap;
use std::io::Write;

use thiserror::Error;

use crate::path::Resolver;

mod echo;
mod exit;
mod type_lookup;

pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use type_lookup::TypeCommand;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}: missing argument")]
    MissingArgument(&'static str),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// What the loop should do once a builtin returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

/// Everything a builtin may touch while it runs.
pub struct CommandContext<'a> {
    pub out: &'a mut dyn Write,
    pub resolver: &'a Resolver,
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>)
        -> Result<Outcome, CommandError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Echo,
    Type,
    Exit,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Builtin::Echo, Builtin::Type, Builtin::Exit];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Echo => "echo",
            Builtin::Type => "type",
            Builtin::Exit => "exit",
        }
    }
}

impl Command for Builtin {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Outcome, CommandError> {
        match self {
            Builtin::Echo => EchoCommand.execute(args, ctx),
            Builtin::Type => TypeCommand.execute(args, ctx),
            Builtin::Exit => ExitCommand.execute(args, ctx),
        }
    }
}

/// Name to builtin table. Filled once in `new`; only lookups afterwards.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, Builtin>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let commands = Builtin::ALL
            .iter()
            .map(|builtin| (builtin.name(), *builtin))
            .collect();
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.commands.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

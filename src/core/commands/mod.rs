use std::collections::BTreeMap;
use std::io::{self, Write};

mod cd;
mod exit;

pub use cd::CdCommand;
pub use exit::ExitCommand;

use crate::core::env::ShellEnv;
use crate::core::resolver;
use crate::error::os_error_text;
use crate::process::{self, ProcessError};

#[derive(Debug)]
pub enum CommandError {
    HomeNotSet,
    ChangeDir(io::Error),
    UnknownCommand(String),
    Process(ProcessError),
    Io(io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::HomeNotSet => write!(f, "cd: HOME not set"),
            CommandError::ChangeDir(err) => write!(f, "chdir: {}", os_error_text(err)),
            CommandError::UnknownCommand(name) => write!(f, "[{}]: Unknown Command", name),
            CommandError::Process(err) => write!(f, "{}", err),
            CommandError::Io(err) => write!(f, "write: {}", os_error_text(err)),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

/// What the read loop does after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A command run inside the shell process. `args` excludes the command name.
pub trait Command {
    fn execute(&self, args: &[String], env: &ShellEnv) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], env: &ShellEnv) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, env),
            CommandType::Exit(cmd) => cmd.execute(args, env),
        }
    }
}

/// Routes an argument vector to a built-in or to an external program.
#[derive(Clone)]
pub struct Dispatcher {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        Self { commands }
    }

    /// Runs one argument vector.
    ///
    /// Status lines go to `out`. Diagnostics that still let a status be
    /// reported (a failed `execv` in the child) go to `err`; everything else
    /// comes back as a `CommandError` for the caller to print.
    pub fn execute(
        &self,
        args: &[String],
        env: &ShellEnv,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let Some(name) = args.first() else {
            return Ok(Flow::Continue);
        };

        if let Some(cmd) = self.commands.get(name.as_str()) {
            return cmd.execute(&args[1..], env);
        }
        self.run_external(name, args, env, out, err)
    }

    fn run_external(
        &self,
        name: &str,
        args: &[String],
        env: &ShellEnv,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let path = resolver::resolve(name, env.home())
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        // The child gets a copy of any unflushed buffer; empty it first.
        out.flush()?;
        err.flush()?;

        let launched = process::launch(&path, args)?;
        if let Some(exec_err) = &launched.exec_failure {
            writeln!(err, "execv: {}", os_error_text(exec_err))?;
            err.flush()?;
        }
        process::report(launched.outcome, out)?;
        Ok(Flow::Continue)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

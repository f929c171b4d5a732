use super::{Command, CommandError, Flow};
use crate::core::env::ShellEnv;

/// `exit`: stops the read loop. Any arguments are ignored.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _env: &ShellEnv) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

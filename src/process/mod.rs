use std::fmt;
use std::io;

use crate::error::os_error_text;

pub mod launcher;
pub mod status;

pub use launcher::{launch, Launched, EXEC_FAILURE_STATUS};
pub use status::{report, TerminationOutcome};

#[derive(Debug)]
pub enum ProcessError {
    Pipe(io::Error),
    Fork(io::Error),
    Wait(io::Error),
    InvalidArgument(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Pipe(e) => write!(f, "pipe: {}", os_error_text(e)),
            ProcessError::Fork(e) => write!(f, "fork: {}", os_error_text(e)),
            ProcessError::Wait(e) => write!(f, "waitpid: {}", os_error_text(e)),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "execv: argument contains a NUL byte: {:?}", arg)
            }
        }
    }
}

impl std::error::Error for ProcessError {}

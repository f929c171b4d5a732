use std::fmt;
use std::io::{self, Write};

/// How an external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationOutcome {
    ExitedNormally(i32),
    KilledBySignal(i32),
    Unknown,
}

impl TerminationOutcome {
    /// Classifies a raw status word as filled in by `waitpid`.
    ///
    /// Stopped and continued children are not tracked, so anything that is
    /// neither a normal exit nor a fatal signal is `Unknown`.
    pub fn from_wait_status(status: libc::c_int) -> Self {
        if libc::WIFEXITED(status) {
            TerminationOutcome::ExitedNormally(libc::WEXITSTATUS(status))
        } else if libc::WIFSIGNALED(status) {
            TerminationOutcome::KilledBySignal(libc::WTERMSIG(status))
        } else {
            TerminationOutcome::Unknown
        }
    }
}

impl fmt::Display for TerminationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationOutcome::ExitedNormally(code) => {
                write!(f, "Command executed successfully. Return code: {}", code)
            }
            TerminationOutcome::KilledBySignal(signal) => {
                write!(f, "Command terminated by signal: {}", signal)
            }
            TerminationOutcome::Unknown => write!(f, "Command finished. (unknown status)"),
        }
    }
}

pub fn report(outcome: TerminationOutcome, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", outcome)?;
    out.flush()
}

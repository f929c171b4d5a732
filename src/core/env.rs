use std::env;

/// The parts of the process environment the dispatcher reads.
///
/// Captured once per input line and handed to the resolver and `cd`, so both
/// can be exercised without touching the real environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellEnv {
    home: Option<String>,
}

impl ShellEnv {
    pub fn from_process() -> Self {
        Self {
            home: env::var_os("HOME").map(|home| home.to_string_lossy().into_owned()),
        }
    }

    pub fn with_home(home: Option<&str>) -> Self {
        Self {
            home: home.map(str::to_owned),
        }
    }

    /// `HOME` exactly as set, which may be empty.
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }
}

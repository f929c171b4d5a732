use crate::core::tokenizer::DEFAULT_MAX_ARGS;

pub const DEFAULT_PROMPT: &str = "mini-bash $ ";
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "MINI_BASH_LOG";

/// Compiled-in settings. There are no config files or flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub max_args: usize,
    pub history_size: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_args: DEFAULT_MAX_ARGS,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

/// Installs the `env_logger` backend, filtered by [`LOG_ENV`].
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter(LOG_ENV))
        .format_timestamp(None)
        .init();
}

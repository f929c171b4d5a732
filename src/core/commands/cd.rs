use super::{Command, CommandError, Flow};
use crate::core::env::ShellEnv;
use log::debug;
use std::env;

/// `cd [dir]`: changes the working directory of the shell process, falling
/// back to `$HOME` without an argument.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], shell_env: &ShellEnv) -> Result<Flow, CommandError> {
        let target = args
            .first()
            .map(String::as_str)
            .or_else(|| shell_env.home())
            .ok_or(CommandError::HomeNotSet)?;

        env::set_current_dir(target).map_err(CommandError::ChangeDir)?;
        debug!("changed directory to {}", target);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // The working directory is process-wide, so every case that moves it
    // lives in this one test.
    #[test]
    fn test_cd_changes_process_directory() {
        let cmd = CdCommand::new();
        let original = env::current_dir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let shell_env = ShellEnv::with_home(Some(&home.path().to_string_lossy()));

        // no argument: go to HOME
        assert!(matches!(cmd.execute(&[], &shell_env), Ok(Flow::Continue)));
        assert_eq!(
            env::current_dir().unwrap(),
            home.path().canonicalize().unwrap()
        );

        // explicit argument wins over HOME
        let target = other.path().to_string_lossy().into_owned();
        assert!(cmd.execute(&[target], &shell_env).is_ok());
        let here = env::current_dir().unwrap();
        assert_eq!(here, other.path().canonicalize().unwrap());

        // a bad target leaves the directory alone
        let result = cmd.execute(&["/nonexistent/path".to_string()], &shell_env);
        assert!(matches!(result, Err(CommandError::ChangeDir(_))));
        assert_eq!(env::current_dir().unwrap(), here);

        env::set_current_dir(&original).unwrap();
        assert_eq!(env::current_dir().unwrap(), PathBuf::from(&original));
    }

    #[test]
    fn test_cd_without_home_or_argument() {
        let cmd = CdCommand::new();
        let result = cmd.execute(&[], &ShellEnv::with_home(None));
        assert!(matches!(result, Err(CommandError::HomeNotSet)));
    }
}

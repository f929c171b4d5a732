use mini_bash::config::{self, ShellConfig};
use mini_bash::shell::Shell;

fn main() -> Result<(), mini_bash::error::ShellError> {
    config::init_logging();

    let mut shell = Shell::new(ShellConfig::default())?;
    shell.run()
}

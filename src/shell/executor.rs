use std::io::Write;

use log::warn;

use crate::core::{Flow, ShellEnv};

pub(crate) trait CommandHandler {
    fn execute_command(&self, line: &str, out: &mut dyn Write, err: &mut dyn Write) -> Flow;
}

impl CommandHandler for super::Shell {
    fn execute_command(&self, line: &str, out: &mut dyn Write, err: &mut dyn Write) -> Flow {
        let args = self.tokenizer.tokenize(line);
        if args.is_empty() {
            return Flow::Continue;
        }

        let env = ShellEnv::from_process();
        match self.dispatcher.execute(&args, &env, out, err) {
            Ok(flow) => flow,
            Err(e) => {
                if let Err(write_err) = writeln!(err, "{}", e).and_then(|_| err.flush()) {
                    warn!("could not report {:?}: {}", e, write_err);
                }
                Flow::Continue
            }
        }
    }
}

use std::io::{self, IsTerminal, Write};

mod executor;

use crate::{
    config::ShellConfig,
    core::{Dispatcher, Flow, Tokenizer},
    error::ShellError,
    input::{LineReader, ReadOutcome},
};

use executor::CommandHandler;

/// The read loop: prompt, read, tokenize, dispatch, until `exit` or end of
/// input.
pub struct Shell {
    pub(crate) config: ShellConfig,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) input: LineReader,
}

impl Shell {
    /// Uses the line editor when stdin is a terminal and a plain reader
    /// otherwise.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let dispatcher = Dispatcher::new();
        let input = if io::stdin().is_terminal() {
            LineReader::interactive(&config, dispatcher.clone())?
        } else {
            LineReader::plain_stdin()?
        };
        Ok(Self::with_input(config, dispatcher, input))
    }

    pub fn with_input(config: ShellConfig, dispatcher: Dispatcher, input: LineReader) -> Self {
        Shell {
            tokenizer: Tokenizer::new(config.max_args),
            config,
            dispatcher,
            input,
        }
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        self.run_with(&mut io::stdout(), &mut io::stderr())
    }

    pub fn run_with(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), ShellError> {
        loop {
            match self.input.read_line(&self.config.prompt, out)? {
                ReadOutcome::Line(line) => {
                    if self.execute_command(&line, out, err) == Flow::Exit {
                        break;
                    }
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    writeln!(out)?;
                    out.flush()?;
                    break;
                }
            }
        }
        Ok(())
    }
}

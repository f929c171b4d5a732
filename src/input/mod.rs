//! Line input: a rustyline editor on a terminal, a plain buffered reader
//! everywhere else.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::os::fd::{AsFd, BorrowedFd};

use log::warn;
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

mod completer;

pub use completer::{CommandCompleter, PathCompleter, ShellCompleter};

use crate::config::ShellConfig;
use crate::core::Dispatcher;
use crate::error::ShellError;

/// One read from the input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt; the partial line is dropped.
    Interrupted,
    Eof,
}

pub enum LineReader {
    Interactive(Box<Editor<ShellCompleter, DefaultHistory>>),
    Plain(PlainReader),
}

impl LineReader {
    /// Editor with in-memory history, completion and highlighting. History is
    /// never written to disk.
    pub fn interactive(config: &ShellConfig, dispatcher: Dispatcher) -> Result<Self, ShellError> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(config.history_size)?
            .auto_add_history(true)
            .build();
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::with_config(editor_config)?;
        editor.set_helper(Some(ShellCompleter::new(dispatcher)));
        Ok(LineReader::Interactive(Box::new(editor)))
    }

    pub fn plain(reader: impl BufRead + 'static) -> Self {
        LineReader::Plain(PlainReader::new(reader))
    }

    /// Plain reader over the process's stdin that never reads past the end of
    /// the current line, so launched programs see the rest of the input.
    ///
    /// `io::stdin()` keeps its own buffer, so this goes to the descriptor.
    pub fn plain_stdin() -> io::Result<Self> {
        Self::plain_fd(io::stdin().as_fd())
    }

    /// Reads a duplicate of `fd` one byte at a time. The duplicate shares the
    /// file offset, so whatever is left unread stays with `fd`.
    pub fn plain_fd(fd: BorrowedFd<'_>) -> io::Result<Self> {
        let file = File::from(fd.try_clone_to_owned()?);
        Ok(Self::plain(BufReader::with_capacity(1, file)))
    }

    /// Shows `prompt` and reads one line. Prompt output that cannot be
    /// written is fatal; a failed read counts as end of input.
    pub fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<ReadOutcome, ShellError> {
        match self {
            LineReader::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => Ok(ReadOutcome::Line(line)),
                Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
                Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
                Err(e) => Err(e.into()),
            },
            LineReader::Plain(reader) => reader.read_line(prompt, out),
        }
    }
}

pub struct PlainReader {
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl PlainReader {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            buf: Vec::new(),
        }
    }

    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<ReadOutcome, ShellError> {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => Ok(ReadOutcome::Eof),
            Ok(_) => Ok(ReadOutcome::Line(String::from_utf8_lossy(&self.buf).into_owned())),
            Err(e) => {
                warn!("failed to read input, treating as end of input: {}", e);
                Ok(ReadOutcome::Eof)
            }
        }
    }
}

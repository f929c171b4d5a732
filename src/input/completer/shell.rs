use std::borrow::Cow;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::core::{env::ShellEnv, resolver, tokenizer::is_separator, Dispatcher};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Line-editor helper: completion plus command highlighting.
#[derive(Clone)]
pub struct ShellCompleter {
    dispatcher: Dispatcher,
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(dispatcher: Dispatcher) -> Self {
        let command_completer = CommandCompleter::new(dispatcher.builtin_names());
        ShellCompleter {
            dispatcher,
            command_completer,
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    fn is_known_command(&self, name: &str) -> bool {
        self.dispatcher.is_builtin(name)
            || resolver::resolve(name, ShellEnv::from_process().home()).is_some()
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighter.is_enabled() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |name| self.is_known_command(name)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let word_start = line_up_to_cursor
            .rfind(is_separator)
            .map_or(0, |idx| idx + 1);
        let word = &line_up_to_cursor[word_start..];
        let is_first_word = line_up_to_cursor[..word_start]
            .chars()
            .all(is_separator);

        let matches = if is_first_word {
            let env = ShellEnv::from_process();
            self.command_completer.complete_command(word, env.home())
        } else {
            self.path_completer.complete_path(word)
        };

        Ok((word_start, matches))
    }
}

use log::{trace, warn};

/// Default cap on the number of tokens kept from one line.
pub const DEFAULT_MAX_ARGS: usize = 128;

/// Characters that separate tokens. Runs of them collapse.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Splits input lines into argument vectors.
///
/// There is no quoting, escaping or expansion: a token is any maximal run of
/// non-separator characters. Lines with more than `max_args` tokens are
/// truncated, not rejected.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    max_args: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ARGS)
    }
}

impl Tokenizer {
    pub fn new(max_args: usize) -> Self {
        Self {
            max_args: max_args.max(1),
        }
    }

    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let mut tokens = line.split(is_separator).filter(|token| !token.is_empty());
        let args: Vec<String> = tokens
            .by_ref()
            .take(self.max_args)
            .map(str::to_owned)
            .collect();

        if tokens.next().is_some() {
            warn!(
                "argument list truncated to {} entries, the rest of the line was dropped",
                self.max_args
            );
        }
        trace!("tokenized {:?}", args);
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(line: &str) -> Vec<String> {
        Tokenizer::default().tokenize(line)
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(tokenize("  ls   -l  "), vec!["ls", "-l"]);
        assert_eq!(tokenize("ls\t-l\r\n"), vec!["ls", "-l"]);
        assert_eq!(tokenize("echo \t\r a\n\nb"), vec!["echo", "a", "b"]);
    }

    #[test]
    fn test_blank_lines_yield_nothing() {
        for line in ["", " ", "\n", "\t\t", " \r\n", "   \t  \n"] {
            assert!(tokenize(line).is_empty(), "{:?} produced tokens", line);
        }
    }

    #[test]
    fn test_no_quoting_or_expansion() {
        assert_eq!(
            tokenize("echo \"a b\" $HOME ~ *.rs"),
            vec!["echo", "\"a", "b\"", "$HOME", "~", "*.rs"]
        );
    }

    #[test]
    fn test_other_whitespace_is_literal() {
        // Only space, tab, CR and LF separate tokens.
        assert_eq!(tokenize("a\u{000B}b c"), vec!["a\u{000B}b", "c"]);
    }

    #[test]
    fn test_truncates_beyond_max_args() {
        let tokenizer = Tokenizer::new(3);
        assert_eq!(tokenizer.tokenize("a b c d e"), vec!["a", "b", "c"]);
        assert_eq!(tokenizer.tokenize("a b c"), vec!["a", "b", "c"]);

        let line = vec!["x"; DEFAULT_MAX_ARGS + 10].join(" ");
        assert_eq!(tokenize(&line).len(), DEFAULT_MAX_ARGS);
    }

    #[test]
    fn test_zero_cap_keeps_command_name() {
        let tokenizer = Tokenizer::new(0);
        assert_eq!(tokenizer.tokenize("ls -l"), vec!["ls"]);
    }
}

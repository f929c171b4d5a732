use inksac::prelude::*;

use crate::core::tokenizer::is_separator;

/// Colors the line being edited: the command name cyan when it resolves to
/// a built-in or an executable, red otherwise, and flags yellow.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Styles each word in place; separators are copied through untouched so
    /// the cursor position stays valid.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let mut highlighted = String::with_capacity(input.len() * 2);
        let mut rest = input;
        let mut is_command = true;

        while !rest.is_empty() {
            let gap = rest.find(|c: char| !is_separator(c)).unwrap_or(rest.len());
            highlighted.push_str(&rest[..gap]);
            rest = &rest[gap..];
            if rest.is_empty() {
                break;
            }

            let len = rest.find(is_separator).unwrap_or(rest.len());
            let word = &rest[..len];
            if is_command {
                highlighted.push_str(&self.style_command(word, is_known(word)));
                is_command = false;
            } else if word.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                highlighted.push_str(&word.style(flag_style).to_string());
            } else {
                highlighted.push_str(word);
            }
            rest = &rest[len..];
        }

        highlighted
    }

    fn style_command(&self, word: &str, known: bool) -> String {
        let color = if known { Color::Cyan } else { Color::Red };
        let command_style = Style::builder().foreground(color).bold().build();
        word.style(command_style).to_string()
    }
}

//! Input and output colouring for the shell.

use rustyline::highlight::{CmdKind, Highlighter};
use std::borrow::Cow;
use std::sync::Arc;

use crate::shell::command::{ArgumentKind, Command, CommandRegistry};

/// ANSI escape codes.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

fn paint(color: &str, text: &str) -> String {
    format!("{}{}{}", color, text, colors::RESET)
}

pub struct PassbookHighlighter {
    registry: Arc<CommandRegistry>,
}

impl PassbookHighlighter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Colours the command word by validity and each argument by its kind,
    /// preserving the original whitespace.
    fn highlight_line(&self, line: &str) -> String {
        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;
        let mut command: Option<Arc<dyn Command>> = None;
        let mut seen_command = false;
        let mut arg_index = 0;

        while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
            result.push_str(&rest[..start]);
            rest = &rest[start..];
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..end];

            if seen_command {
                let kind = command.as_ref().and_then(|c| c.argument_kind(arg_index));
                result.push_str(&paint(argument_color(kind), word));
                arg_index += 1;
            } else {
                command = self.registry.get(word);
                let color = if command.is_some() {
                    format!("{}{}", colors::BOLD, colors::CYAN)
                } else {
                    colors::RED.to_string()
                };
                result.push_str(&paint(&color, word));
                seen_command = true;
            }
            rest = &rest[end..];
        }
        result.push_str(rest);
        result
    }
}

fn argument_color(kind: Option<ArgumentKind>) -> &'static str {
    match kind {
        Some(ArgumentKind::Website) => colors::MAGENTA,
        Some(ArgumentKind::Command) => colors::YELLOW,
        Some(ArgumentKind::Secret) => colors::DIM,
        Some(ArgumentKind::Plain) | None => colors::WHITE,
    }
}

impl Highlighter for PassbookHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(format!(
            "{}{}{}{}",
            colors::BOLD,
            colors::BRIGHT_GREEN,
            prompt,
            colors::RESET
        ))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(paint(colors::DIM, hint))
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        _completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        Cow::Owned(paint(colors::BRIGHT_CYAN, candidate))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Colouring for command output.
pub struct OutputHighlighter;

impl OutputHighlighter {
    pub fn success(msg: &str) -> String {
        paint(colors::GREEN, msg)
    }

    pub fn error(msg: &str) -> String {
        paint(colors::BRIGHT_RED, msg)
    }
}

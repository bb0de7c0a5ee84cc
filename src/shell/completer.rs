//! Tab completion for command names and stored website names.

use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::sync::{Arc, RwLock};

use crate::shell::command::{ArgumentKind, Command, CommandRegistry};
use crate::trie::Trie;

pub struct PassbookCompleter {
    registry: Arc<CommandRegistry>,
    /// Website names, shared with the shell loop which adds to it on save.
    key_trie: Arc<RwLock<Trie>>,
}

impl PassbookCompleter {
    pub fn new(registry: Arc<CommandRegistry>, key_trie: Arc<RwLock<Trie>>) -> Self {
        Self { registry, key_trie }
    }

    fn complete_command(&self, partial: &str) -> Vec<Pair> {
        to_pairs(self.registry.completions(partial))
    }

    fn complete_website(&self, partial: &str) -> Vec<Pair> {
        match self.key_trie.read() {
            Ok(trie) => to_pairs(trie.completions(partial)),
            Err(_) => vec![],
        }
    }

    fn parse_context<'a>(&self, line: &'a str, pos: usize) -> CompletionContext<'a> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let at_new_word = line_to_pos.ends_with(char::is_whitespace);

        match parts.as_slice() {
            [] => CompletionContext::Command { partial: "" },
            [command] if !at_new_word => CompletionContext::Command { partial: *command },
            [command, rest @ ..] => {
                let (arg_index, partial) = if at_new_word {
                    (rest.len(), "")
                } else {
                    (rest.len() - 1, rest[rest.len() - 1])
                };
                CompletionContext::Argument {
                    command: *command,
                    arg_index,
                    partial,
                }
            }
        }
    }
}

fn to_pairs(words: Vec<String>) -> Vec<Pair> {
    words
        .into_iter()
        .map(|s| Pair {
            display: s.clone(),
            replacement: s,
        })
        .collect()
}

#[derive(Debug)]
enum CompletionContext<'a> {
    Command {
        partial: &'a str,
    },
    Argument {
        command: &'a str,
        arg_index: usize,
        partial: &'a str,
    },
}

impl Completer for PassbookCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match self.parse_context(line, pos) {
            CompletionContext::Command { partial } => {
                Ok((pos - partial.len(), self.complete_command(partial)))
            }
            CompletionContext::Argument {
                command,
                arg_index,
                partial,
            } => {
                let kind = self
                    .registry
                    .get(command)
                    .and_then(|cmd| cmd.argument_kind(arg_index));
                let completions = match kind {
                    Some(ArgumentKind::Website) => self.complete_website(partial),
                    Some(ArgumentKind::Command) => self.complete_command(partial),
                    _ => vec![],
                };
                Ok((pos - partial.len(), completions))
            }
        }
    }
}

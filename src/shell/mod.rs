//! Interactive shell built on rustyline.
//!
//! Provides command and website-name completion, input highlighting and
//! persistent history on top of the command registry.

pub mod command;
pub mod commands;
pub mod completer;
pub mod highlighter;
pub mod history;

use anyhow::{Result, anyhow};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Context, Editor, Helper};
use std::borrow::Cow;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::logging::timed;
use crate::store::CredentialStore;
use crate::trie::Trie;

use command::{CommandRegistry, CommandResult, ShellContext};
use commands::register_all;
use completer::PassbookCompleter;
use highlighter::{OutputHighlighter, PassbookHighlighter};
use history::HistoryConfig;

const PROMPT: &str = "passbook> ";

type PassbookEditor = Editor<PassbookHelper, FileHistory>;

/// rustyline helper: completion and highlighting, no hints or validation.
pub struct PassbookHelper {
    completer: PassbookCompleter,
    highlighter: PassbookHighlighter,
}

impl PassbookHelper {
    pub fn new(registry: Arc<CommandRegistry>, key_trie: Arc<RwLock<Trie>>) -> Self {
        Self {
            completer: PassbookCompleter::new(Arc::clone(&registry), key_trie),
            highlighter: PassbookHighlighter::new(registry),
        }
    }
}

impl Completer for PassbookHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for PassbookHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        self.highlighter.highlight_prompt(prompt, default)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        self.highlighter.highlight_hint(hint)
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        completion: CompletionType,
    ) -> Cow<'c, str> {
        self.highlighter.highlight_candidate(candidate, completion)
    }

    fn highlight_char(&self, line: &str, pos: usize, kind: CmdKind) -> bool {
        self.highlighter.highlight_char(line, pos, kind)
    }
}

impl Hinter for PassbookHelper {
    type Hint = String;
}

impl Validator for PassbookHelper {}

impl Helper for PassbookHelper {}

pub struct ShellConfig {
    pub history: HistoryConfig,
    pub show_welcome: bool,
    /// Copy passwords produced by `generate` (or by a bare `save`) to the
    /// system clipboard.
    pub copy_generated: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            show_welcome: true,
            copy_generated: false,
        }
    }
}

/// The interactive shell.
pub struct Shell {
    registry: Arc<CommandRegistry>,
    /// Stored website names, shared with the completer.
    key_trie: Arc<RwLock<Trie>>,
    config: ShellConfig,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self {
            registry: Arc::new(registry),
            key_trie: Arc::new(RwLock::new(Trie::new())),
            config,
        }
    }

    fn lock_key_trie(&self) -> Result<RwLockWriteGuard<'_, Trie>> {
        self.key_trie
            .write()
            .map_err(|e| anyhow!("Website completion lock poisoned: {}", e))
    }

    /// Replaces the completion trie's contents with the store's websites.
    /// An unreadable store leaves completion empty rather than failing.
    fn init_key_trie(&self, store: &CredentialStore) -> Result<()> {
        let websites = store.websites().unwrap_or_else(|e| {
            log::warn!("Website completion disabled, store unreadable: {}", e);
            Vec::new()
        });

        let mut trie = self.lock_key_trie()?;
        trie.clear();
        websites.iter().for_each(|w| trie.insert(w));
        log::debug!("Loaded {} websites for completion", trie.len());
        Ok(())
    }

    fn open_editor(&self) -> Result<PassbookEditor> {
        let mut editor = PassbookEditor::with_config(self.config.history.editor_config()?)?;
        editor.set_helper(Some(PassbookHelper::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.key_trie),
        )));

        let path = &self.config.history.path;
        if path.exists() {
            if let Err(e) = editor.load_history(path) {
                log::warn!("Could not load history from {}: {}", path.display(), e);
            }
        }
        Ok(editor)
    }

    fn close_editor(&self, editor: &mut PassbookEditor) {
        let path = &self.config.history.path;
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Could not create {}: {}", parent.display(), e);
            }
        }
        if let Err(e) = editor.save_history(path) {
            log::warn!("Could not save history to {}: {}", path.display(), e);
        }
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    ///
    /// A password printed by `generate` is remembered across lines so a
    /// following `save` without a password stores it.
    pub fn run(&self, store: &CredentialStore) -> Result<()> {
        self.init_key_trie(store)?;
        let mut editor = self.open_editor()?;

        if self.config.show_welcome {
            println!(
                "{}",
                OutputHighlighter::success("passbook ready. Type 'help' for available commands.")
            );
        }
        log::info!("Shell started on {}", store.path().display());

        let mut last_generated: Option<String> = None;

        loop {
            let line = match editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("{}", OutputHighlighter::error(&format!("Error: {}", e)));
                    log::error!("Failed to read input: {}", e);
                    break;
                }
            };

            if self.should_record(&line) {
                let _ = editor.add_history_entry(line.trim());
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let result = {
                let mut trie = self.lock_key_trie()?;
                let mut ctx = ShellContext::new(store, &mut trie)
                    .with_registry(&self.registry)
                    .with_last_generated(last_generated.take())
                    .with_clipboard(self.config.copy_generated);
                let result = self.dispatch(line, &mut ctx);
                last_generated = ctx.last_generated;
                result
            };

            if !print_result(result) {
                break;
            }
        }

        self.close_editor(&mut editor);
        log::info!("Shell exited");
        Ok(())
    }

    /// Whether the raw input `line` may be written to the history file.
    ///
    /// Skipped: blank lines, lines starting with whitespace when
    /// `ignore_space` is set, lines that do not tokenize, lines a command
    /// refuses (an explicit password), and unknown commands with arguments,
    /// since a mistyped `save` would still carry its password.
    fn should_record(&self, line: &str) -> bool {
        if self.config.history.ignore_space && line.starts_with(char::is_whitespace) {
            return false;
        }
        let Ok(words) = split_line(line) else {
            return false;
        };
        let Some((name, args)) = words.split_first() else {
            return false;
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match self.registry.get(name) {
            Some(cmd) => cmd.record_in_history(&args),
            None => args.is_empty(),
        }
    }

    /// Runs one line against `store` outside the interactive loop.
    pub fn execute_line(&self, line: &str, store: &CredentialStore) -> Result<CommandResult> {
        let mut trie = self.lock_key_trie()?;
        let mut ctx = ShellContext::new(store, &mut trie)
            .with_registry(&self.registry)
            .with_clipboard(self.config.copy_generated);
        Ok(self.dispatch(line, &mut ctx))
    }

    /// Splits `line` with shell quoting rules, so `"my bank"` is one
    /// argument and quoted text keeps its exact spacing.
    fn dispatch(&self, line: &str, ctx: &mut ShellContext) -> CommandResult {
        let words = match split_line(line) {
            Ok(words) => words,
            Err(e) => return CommandResult::error(format!("Could not parse input: {}", e)),
        };
        let Some((word, args)) = words.split_first() else {
            return CommandResult::Continue;
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let Some(cmd) = self.registry.get(word) else {
            return CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                word
            ));
        };
        log::debug!("Running '{}' with {} argument(s)", cmd.name(), args.len());
        timed(cmd.name(), || cmd.execute(&args, ctx))
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `line` into words with shell quoting rules, except that `#`
/// never starts a comment: generated passwords may begin with it.
fn split_line(line: &str) -> Result<Vec<String>, shell_words::ParseError> {
    let mut escaped = String::with_capacity(line.len() + 4);
    let mut quote: Option<char> = None;
    let mut at_word_start = true;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            None => match c {
                '#' if at_word_start => escaped.push_str("\\#"),
                '\\' => {
                    escaped.push(c);
                    escaped.extend(chars.next());
                }
                '\'' | '"' => {
                    quote = Some(c);
                    escaped.push(c);
                }
                _ => escaped.push(c),
            },
            Some('"') if c == '\\' => {
                escaped.push(c);
                escaped.extend(chars.next());
            }
            Some(q) => {
                if c == q {
                    quote = None;
                }
                escaped.push(c);
            }
        }
        at_word_start = quote.is_none() && c.is_whitespace();
    }
    shell_words::split(&escaped)
}

/// Prints a command's outcome; returns `false` once the shell should stop.
fn print_result(result: CommandResult) -> bool {
    match result {
        CommandResult::Success(Some(msg)) => println!("{}", msg),
        CommandResult::Error(msg) => eprintln!("{}", OutputHighlighter::error(&msg)),
        CommandResult::Exit => return false,
        CommandResult::Success(None) | CommandResult::Continue => {}
    }
    true
}

//! The `Command` trait, the per-line execution context and the registry
//! that resolves names and aliases.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::store::CredentialStore;
use crate::trie::Trie;

/// Outcome of running one shell line.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Done; the message, if any, is printed as-is.
    Success(Option<String>),
    /// Failed; the message is printed to stderr.
    Error(String),
    /// Leave the shell loop.
    Exit,
    /// Nothing to do (blank input).
    Continue,
}

impl CommandResult {
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(Some(msg.into()))
    }

    pub fn ok() -> Self {
        Self::Success(None)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }
}

/// What a positional argument holds; drives completion and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// A website already in the store.
    Website,
    /// The name of another command.
    Command,
    /// A password; never echoed in colour.
    Secret,
    /// Free text with no completion.
    Plain,
}

/// State a command may read or update while it runs.
pub struct ShellContext<'a> {
    pub store: &'a CredentialStore,
    /// Completion source for website arguments; `save` adds to it.
    pub key_trie: &'a mut Trie,
    /// Present when running inside a full shell; `help` needs it.
    pub registry: Option<&'a CommandRegistry>,
    /// Last password produced by `generate`, consumed by `save`.
    pub last_generated: Option<String>,
    /// Copy newly generated passwords to the system clipboard.
    pub copy_generated: bool,
}

impl<'a> ShellContext<'a> {
    pub fn new(store: &'a CredentialStore, key_trie: &'a mut Trie) -> Self {
        Self {
            store,
            key_trie,
            registry: None,
            last_generated: None,
            copy_generated: false,
        }
    }

    pub fn with_registry(self, registry: &'a CommandRegistry) -> Self {
        Self {
            registry: Some(registry),
            ..self
        }
    }

    pub fn with_last_generated(self, password: Option<String>) -> Self {
        Self {
            last_generated: password,
            ..self
        }
    }

    pub fn with_clipboard(self, copy_generated: bool) -> Self {
        Self {
            copy_generated,
            ..self
        }
    }
}

/// One shell verb.
pub trait Command: Send + Sync {
    /// Canonical name, shown in help.
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line summary for the help overview.
    fn description(&self) -> &str;

    /// Synopsis such as `search <website>`.
    fn usage(&self) -> &str;

    /// Longer text for `help <command>`; defaults to the summary.
    fn help(&self) -> &str {
        self.description()
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult;

    /// Kind of the argument at `arg_index`, or `None` past the last one.
    fn argument_kind(&self, _arg_index: usize) -> Option<ArgumentKind> {
        None
    }

    /// Whether a line running this command with `args` may be written to
    /// the history file.
    fn record_in_history(&self, _args: &[&str]) -> bool {
        true
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Command").field(&self.name()).finish()
    }
}

/// Every command the shell knows, addressable by name or alias.
#[derive(Default)]
pub struct CommandRegistry {
    by_name: BTreeMap<String, Arc<dyn Command>>,
    alias_to_name: HashMap<String, String>,
    /// Names and aliases together, for completion.
    words: Trie,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        for word in std::iter::once(name.as_str()).chain(command.aliases().iter().copied()) {
            self.words.insert(word);
        }
        for alias in command.aliases() {
            self.alias_to_name.insert(alias.to_string(), name.clone());
        }
        self.by_name.insert(name, command);
    }

    /// Resolves `word` through the alias table, falling back to a name.
    pub fn get(&self, word: &str) -> Option<Arc<dyn Command>> {
        let name = self
            .alias_to_name
            .get(word)
            .map_or(word, String::as_str);
        self.by_name.get(name).cloned()
    }

    /// Commands in name order.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.by_name.values()
    }

    /// Names and aliases beginning with `prefix`, sorted.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.words.completions(prefix)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

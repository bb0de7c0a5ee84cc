//! Quit command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to exit the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }

    fn description(&self) -> &str {
        "Exit passbook"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        ctx.last_generated = None;
        CommandResult::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::test_support::temp_store;
    use crate::trie::Trie;

    #[test]
    fn test_quit_forgets_generated_password() {
        let (store, _dir) = temp_store();
        let mut trie = Trie::new();
        let mut ctx =
            ShellContext::new(&store, &mut trie).with_last_generated(Some("Xy7!abcd".into()));

        assert!(matches!(
            QuitCommand.execute(&[], &mut ctx),
            CommandResult::Exit
        ));
        assert!(ctx.last_generated.is_none());
    }
}

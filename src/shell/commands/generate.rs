//! Generate command implementation.

use crate::clipboard;
use crate::password;
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to generate a new random password.
pub struct GenerateCommand;

impl Command for GenerateCommand {
    fn name(&self) -> &str {
        "generate"
    }

    fn aliases(&self) -> &[&str] {
        &["gen", "pw"]
    }

    fn description(&self) -> &str {
        "Generate a random password"
    }

    fn usage(&self) -> &str {
        "generate"
    }

    fn help(&self) -> &str {
        "Generate a random password of 8-12 characters containing letters,\n\
         1-4 symbols (@!#$%&()*+) and 1-4 digits.\n\n\
         The password is remembered until the next 'save', which uses it\n\
         when no password is given. It is also copied to the clipboard\n\
         unless passbook was started with --no-copy.\n\n\
         Examples:\n  \
           generate\n  \
           gen"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        match password::generate() {
            Ok(pw) => {
                log::info!("Generated a new password");
                let message = clipboard::announce(&pw, ctx.copy_generated);
                ctx.last_generated = Some(pw);
                CommandResult::success(message)
            }
            Err(e) => {
                log::error!("Generated password failed validation: {}", e.category());
                CommandResult::error(format!("{}: {}", e.category(), e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::validate_password;
    use crate::shell::commands::test_support::temp_store;
    use crate::trie::Trie;

    #[test]
    fn test_generate_remembers_password() {
        let (store, _dir) = temp_store();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&store, &mut trie);

        let result = GenerateCommand.execute(&[], &mut ctx);

        match result {
            CommandResult::Success(Some(pw)) => {
                assert!(validate_password(&pw).is_ok());
                assert_eq!(ctx.last_generated.as_deref(), Some(pw.as_str()));
            }
            other => panic!("Expected generated password, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_with_clipboard_still_prints_password() {
        let (store, _dir) = temp_store();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&store, &mut trie).with_clipboard(true);

        match GenerateCommand.execute(&[], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                let remembered = ctx.last_generated.clone().unwrap();
                assert_eq!(msg.lines().next(), Some(remembered.as_str()));
                assert_eq!(msg.lines().count(), 2);
            }
            other => panic!("Expected generated password, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_does_not_touch_store() {
        let (store, _dir) = temp_store();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&store, &mut trie);

        GenerateCommand.execute(&[], &mut ctx);
        assert!(!store.path().exists());
    }
}

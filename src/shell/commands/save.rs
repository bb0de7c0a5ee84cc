//! Save command implementation.

use crate::clipboard;
use crate::error::StoreError;
use crate::password;
use crate::shell::command::{ArgumentKind, Command, CommandResult, ShellContext};

/// Command to save the credentials for a website.
pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &str {
        "save"
    }

    fn aliases(&self) -> &[&str] {
        &["add", "a"]
    }

    fn description(&self) -> &str {
        "Save the email and password for a website"
    }

    fn usage(&self) -> &str {
        "save <website> <email> [password]"
    }

    fn help(&self) -> &str {
        "Save a website's email/username and password, replacing any\n\
         existing record for that website.\n\n\
         Without a password, the one from the last 'generate' is used, or a\n\
         fresh one is generated, shown and copied to the clipboard.\n\n\
         Quote a website or password that contains spaces or quotes;\n\
         quoted text is saved exactly as typed.\n\n\
         Password rules:\n  \
           - 8-12 characters long\n  \
           - at least one symbol (@!#$%&()*+)\n  \
           - at least one number (0-9)\n\n\
         Examples:\n  \
           save github.com me@example.com\n  \
           save github.com me@example.com Abc12345!\n  \
           save \"my bank\" me@example.com 'two  spaces1!'"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let (website, email, given) = match *args {
            [website, email] => (website, email, None),
            [website, email, password] => (website, email, Some(password)),
            [_, _, _, ..] => {
                return CommandResult::error(format!(
                    "Usage: {}\nToo many arguments; quote a website or password containing spaces",
                    self.usage()
                ));
            }
            _ => {
                return CommandResult::error(format!(
                    "Usage: {}\nMissing required arguments",
                    self.usage()
                ));
            }
        };

        let (password, shown) = match (given, ctx.last_generated.clone()) {
            (Some(pw), _) => (pw.to_string(), false),
            (None, Some(pw)) => (pw, false),
            (None, None) => match password::generate() {
                Ok(pw) => (pw, true),
                Err(e) => return CommandResult::error(format!("{}: {}", e.category(), e)),
            },
        };

        match ctx.store.save(website, email, &password) {
            Ok(()) => {
                ctx.key_trie.insert(website);
                ctx.last_generated = None;
                if shown {
                    let mut message = format!("Saved '{}' with password {}", website, password);
                    if ctx.copy_generated {
                        message.push('\n');
                        message.push_str(&clipboard::copy_with_notice(&password));
                    }
                    CommandResult::success(message)
                } else {
                    CommandResult::success(format!("Saved '{}'", website))
                }
            }
            Err(StoreError::Validation(e)) => {
                CommandResult::error(format!("{}: {}", e.category(), e))
            }
            Err(e) => {
                log::error!("Failed to save '{}': {}", website, e);
                CommandResult::error(format!("Failed to save: {}", e))
            }
        }
    }

    fn argument_kind(&self, arg_index: usize) -> Option<ArgumentKind> {
        match arg_index {
            0 => Some(ArgumentKind::Website),
            1 => Some(ArgumentKind::Plain),
            _ => Some(ArgumentKind::Secret),
        }
    }

    fn record_in_history(&self, args: &[&str]) -> bool {
        args.len() <= 2
    }
}

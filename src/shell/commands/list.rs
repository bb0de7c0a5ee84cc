//! List command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to list the websites in the store.
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn aliases(&self) -> &[&str] {
        &["ls", "l"]
    }

    fn description(&self) -> &str {
        "List all saved websites"
    }

    fn usage(&self) -> &str {
        "list"
    }

    fn help(&self) -> &str {
        "Display the names of all saved websites, sorted.\n\n\
         Emails and passwords are not shown; use 'search' for those.\n\n\
         Examples:\n  \
           list\n  \
           ls"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        match ctx.store.websites() {
            Ok(websites) if websites.is_empty() => CommandResult::success("No websites saved."),
            Ok(websites) => {
                log::debug!("Listed {} websites", websites.len());
                CommandResult::success(websites.join("\n"))
            }
            Err(e) => {
                log::error!("Failed to read store: {}", e);
                CommandResult::error(format!("Failed to read store: {}", e))
            }
        }
    }
}

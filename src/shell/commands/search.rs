//! Search command implementation.

use crate::error::StoreError;
use crate::shell::command::{ArgumentKind, Command, CommandResult, ShellContext};

/// Command to look up the credentials stored for a website.
pub struct SearchCommand;

impl Command for SearchCommand {
    fn name(&self) -> &str {
        "search"
    }

    fn aliases(&self) -> &[&str] {
        &["find", "get", "g"]
    }

    fn description(&self) -> &str {
        "Show the email and password saved for a website"
    }

    fn usage(&self) -> &str {
        "search <website>"
    }

    fn help(&self) -> &str {
        "Look up the email and password saved for a website.\n\n\
         Arguments:\n  \
           <website> - The website name exactly as it was saved\n\n\
         Examples:\n  \
           search github.com\n  \
           find github.com"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let Some(website) = args.first() else {
            return CommandResult::error(format!("Usage: {}\nMissing website", self.usage()));
        };

        match ctx.store.find(website) {
            Ok(record) => CommandResult::success(format!(
                "{}\nEmail: {}\nPassword: {}",
                record.website, record.email, record.password
            )),
            Err(StoreError::NotFound(e)) => CommandResult::error(e.to_string()),
            Err(e) => {
                log::error!("Failed to read store: {}", e);
                CommandResult::error(format!("Failed to read store: {}", e))
            }
        }
    }

    fn argument_kind(&self, arg_index: usize) -> Option<ArgumentKind> {
        (arg_index == 0).then_some(ArgumentKind::Website)
    }
}

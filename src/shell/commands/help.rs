use std::fmt::Write;

use crate::shell::command::{ArgumentKind, Command, CommandRegistry, CommandResult, ShellContext};

/// `help [command]`: the command overview, or one command in detail.
pub struct HelpCommand;

fn alias_list(cmd: &dyn Command) -> Option<String> {
    let aliases = cmd.aliases();
    (!aliases.is_empty()).then(|| aliases.join(", "))
}

fn overview(registry: &CommandRegistry) -> String {
    let mut out = String::from("Commands:\n");
    for cmd in registry.commands() {
        let aliases = alias_list(cmd.as_ref())
            .map(|a| format!("[{}]", a))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<10}{:<14}{}",
            cmd.name(),
            aliases,
            cmd.description()
        );
    }
    out.push_str("\n'help <command>' shows usage and details.");
    out
}

fn details(cmd: &dyn Command) -> String {
    let mut out = format!("{}\n\nUsage: {}", cmd.name().to_uppercase(), cmd.usage());
    if let Some(aliases) = alias_list(cmd) {
        let _ = write!(out, "\nAliases: {}", aliases);
    }
    let _ = write!(out, "\n\n{}", cmd.help());
    out
}

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["h", "?"]
    }

    fn description(&self) -> &str {
        "Show the commands, or one command in detail"
    }

    fn usage(&self) -> &str {
        "help [command]"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let Some(registry) = ctx.registry else {
            return CommandResult::error("Help is only available inside the shell");
        };

        match args.first() {
            None => CommandResult::success(overview(registry)),
            Some(word) => match registry.get(word) {
                Some(cmd) => CommandResult::success(details(cmd.as_ref())),
                None => CommandResult::error(format!(
                    "No command named '{}'. Type 'help' for the list.",
                    word
                )),
            },
        }
    }

    fn argument_kind(&self, arg_index: usize) -> Option<ArgumentKind> {
        (arg_index == 0).then_some(ArgumentKind::Command)
    }
}

//! Individual command implementations.

mod generate;
mod help;
mod list;
mod quit;
mod save;
mod search;

pub use generate::GenerateCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use quit::QuitCommand;
pub use save::SaveCommand;
pub use search::SearchCommand;

use std::sync::Arc;

use super::command::CommandRegistry;

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(GenerateCommand));
    registry.register(Arc::new(SaveCommand));
    registry.register(Arc::new(SearchCommand));
    registry.register(Arc::new(ListCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(QuitCommand));
}

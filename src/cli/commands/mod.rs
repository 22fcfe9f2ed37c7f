mod catalog;
mod selection;
mod system;
mod view;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut entries = Vec::new();
    entries.extend(view::definitions());
    entries.extend(selection::definitions());
    entries.extend(catalog::definitions());
    entries.extend(system::definitions());
    entries
}

/// Fails unless `id` names an item of the loaded catalog.
pub(crate) fn require_item(context: &ShellContext, id: &str) -> Result<(), CommandError> {
    if context.catalog.item(id).is_some() {
        Ok(())
    } else {
        Err(CommandError::UnknownItem(id.to_string()))
    }
}

pub(crate) fn require_args(args: &[&str], usage: &str) -> Result<(), CommandError> {
    if args.is_empty() {
        Err(CommandError::InvalidArguments(format!("usage: {}", usage)))
    } else {
        Ok(())
    }
}

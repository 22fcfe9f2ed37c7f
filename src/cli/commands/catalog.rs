use crate::cli::commands::require_args;
use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("hide", "Mark an item as hidden", "hide <id>", cmd_hide),
        CommandEntry::new("unhide", "Make a hidden item visible", "unhide <id>", cmd_unhide),
    ]
}

fn cmd_hide(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    set_hidden(context, args, true, "hide <id>")
}

fn cmd_unhide(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    set_hidden(context, args, false, "unhide <id>")
}

fn set_hidden(context: &mut ShellContext, args: &[&str], hidden: bool, usage: &str) -> CommandResult {
    require_args(args, usage)?;
    let id = args[0];
    let changed = context.catalog.set_hidden(id, hidden)?;
    let state = if hidden { "hidden" } else { "visible" };
    if changed {
        output::success(format!("`{}` is now {}.", id, state));
    } else {
        output::info(format!("`{}` is already {}.", id, state));
    }
    Ok(())
}

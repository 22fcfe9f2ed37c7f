use crate::cli::commands::{require_args, require_item};
use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("select", "Select one or more items", "select <id>...", cmd_select),
        CommandEntry::new(
            "deselect",
            "Deselect one or more items",
            "deselect <id>...",
            cmd_deselect,
        ),
        CommandEntry::new("toggle", "Flip the selection of an item", "toggle <id>", cmd_toggle),
        CommandEntry::new("clear", "Deselect every item", "clear", cmd_clear),
        CommandEntry::new("selected", "List the selected items", "selected", cmd_selected),
        CommandEntry::new(
            "commit",
            "Print the selected ids as JSON",
            "commit",
            cmd_commit,
        ),
    ]
}

fn cmd_select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, "select <id>...")?;
    for id in args {
        require_item(context, id)?;
    }
    for id in args {
        if context.picker.select(id)? {
            output::success(format!("Selected `{}`.", id));
        } else {
            output::info(format!("`{}` is already selected.", id));
        }
    }
    Ok(())
}

fn cmd_deselect(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, "deselect <id>...")?;
    for id in args {
        if context.picker.deselect(id)? {
            output::success(format!("Deselected `{}`.", id));
        } else {
            output::info(format!("`{}` was not selected.", id));
        }
    }
    Ok(())
}

fn cmd_toggle(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, "toggle <id>")?;
    let id = args[0];
    require_item(context, id)?;
    if context.picker.toggle(id)? {
        output::success(format!("Selected `{}`.", id));
    } else {
        output::success(format!("Deselected `{}`.", id));
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.picker.clear_selection()? {
        output::success("Selection cleared.");
    } else {
        output::info("Nothing was selected.");
    }
    Ok(())
}

fn cmd_selected(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ids = context.picker.selection().model_value();
    if ids.is_empty() {
        output::info("No items selected.");
        return Ok(());
    }
    output::section("Selected items");
    for id in ids {
        match context.catalog.item(id) {
            Some(item) => output::raw(&format!("  {} ({})\n", item.name, item.id)),
            None => output::raw(&format!("  {} (not in catalog)\n", id)),
        }
    }
    Ok(())
}

fn cmd_commit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string(context.picker.selection().model_value())?;
    output::raw(&format!("{}\n", json));
    Ok(())
}

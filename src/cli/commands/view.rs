use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "show",
            "List items matching the current search",
            "show",
            cmd_show,
        ),
        CommandEntry::new(
            "all",
            "List every visible, selected, or search-revealed item",
            "all",
            cmd_all,
        ),
        CommandEntry::new(
            "search",
            "Set the search text (no text clears it)",
            "search [text...]",
            cmd_search,
        ),
    ]
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let (text, count) = context.render_filtered();
    if count == 0 {
        output::info("No items match the current filter.");
    } else {
        output::raw(&text);
    }
    Ok(())
}

fn cmd_all(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let (text, count) = context.render_all();
    if count == 0 {
        output::info("No items available.");
    } else {
        output::raw(&text);
    }
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let text = args.join(" ");
    if context.picker.set_search_text(text.as_str()) {
        if text.is_empty() {
            output::success("Search cleared.");
        } else {
            output::success(format!("Searching for `{}`.", text));
        }
    }
    cmd_show(context, &[])
}

use dialoguer::{theme::ColorfulTheme, Confirm};
use picker_config::{Config, ConfigManager};
use picker_core::{BuiltinText, ItemCatalog, SelectionMode, SelectionViewBuilder};
use strsim::levenshtein;

use crate::cli::{
    args::CliArgs,
    commands,
    core::{CommandError, LoopControl},
    output::{self, OutputPreferences},
    registry::{CommandEntry, CommandRegistry},
    render::{item_count, render_rows},
};
use crate::errors::CliError;

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a shell session needs before it starts.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub catalog: ItemCatalog,
    pub selected: Vec<String>,
    pub editable: bool,
    pub search: Option<String>,
    pub config: Config,
}

impl ShellOptions {
    pub fn from_args(args: &CliArgs) -> Result<Self, CliError> {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(ConfigManager::default_location);
        let config = ConfigManager::new(config_path).load()?;
        let catalog = ItemCatalog::load(&args.catalog)?;
        Ok(Self {
            catalog,
            selected: args.selected.clone(),
            editable: args.editable || config.editable_selection,
            search: args.search.clone(),
            config,
        })
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config: Config,
    pub catalog: ItemCatalog,
    pub picker: SelectionViewBuilder<BuiltinText>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, options: ShellOptions) -> Self {
        let ShellOptions {
            catalog,
            selected,
            editable,
            search,
            config,
        } = options;

        output::set_preferences(OutputPreferences {
            color_enabled: config.use_color(),
        });

        let registry = CommandRegistry::from_entries(commands::all_definitions());

        let mut picker = SelectionViewBuilder::with_mode(
            SelectionMode::from_editable(editable),
            selected,
            text_lookup_for(&config),
        );
        if let Some(search) = search {
            picker.set_search_text(search);
        }

        tracing::debug!(
            items = catalog.items().len(),
            editable,
            "picker shell ready"
        );

        Self {
            mode,
            registry,
            config,
            catalog,
            picker,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        let search = self.picker.search_text();
        if search.is_empty() {
            "picker> ".to_string()
        } else {
            format!("picker [{}]> ", search)
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.words().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!("Unknown command `{}`.", input));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .words()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= MAX_SUGGESTION_DISTANCE {
                output::hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help` to list commands and their usage.");
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::Io(err)),
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    /// Asks before dropping an edited working copy; read-only sessions exit directly.
    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script || !self.picker.selection().is_editable() {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Discard the working selection and exit?")
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    /// Search-filtered rows rendered for display.
    pub fn render_filtered(&mut self) -> (String, usize) {
        let selected = self.picker.selected_item_ids().clone();
        let color = self.config.use_color();
        let rows = self.picker.filtered_items_with_group_header(&self.catalog);
        (render_rows(rows, &selected, color), item_count(rows))
    }

    /// Every row that may ever be shown, regardless of the search filter's
    /// hidden-item rule.
    pub fn render_all(&mut self) -> (String, usize) {
        let selected = self.picker.selected_item_ids().clone();
        let color = self.config.use_color();
        let rows = self.picker.all_items_with_group_header(&self.catalog);
        (render_rows(rows, &selected, color), item_count(rows))
    }
}

fn text_lookup_for(config: &Config) -> BuiltinText {
    let text = BuiltinText::for_locale(&config.locale);
    match config.default_group_label() {
        Some(label) => text.with_override(label),
        None => text,
    }
}

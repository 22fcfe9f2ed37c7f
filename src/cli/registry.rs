//! Command table for the picker shell.

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One shell command. Aliases dispatch to the same handler and are listed
/// alongside it in `help`.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn answers_to(&self, word: &str) -> bool {
        self.name == word || self.aliases.contains(&word)
    }

    fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Commands in registration order. The table is small, so lookups scan it.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Builds the table; an entry reusing a word already taken is dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = CommandEntry>) -> Self {
        let mut registry = Self::default();
        for entry in entries {
            if let Some(clash) = entry.words().find(|word| registry.get(word).is_some()) {
                tracing::warn!(command = entry.name, word = clash, "duplicate command word");
                continue;
            }
            registry.entries.push(entry);
        }
        registry
    }

    pub fn get(&self, word: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.answers_to(word))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Every dispatchable word: primary names first, then aliases.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        let names = self.entries.iter().map(|entry| entry.name);
        let aliases = self
            .entries
            .iter()
            .flat_map(|entry| entry.aliases.iter().copied());
        names.chain(aliases)
    }

    pub fn handler(&self, word: &str) -> Option<CommandHandler> {
        self.get(word).map(|entry| entry.handler)
    }
}

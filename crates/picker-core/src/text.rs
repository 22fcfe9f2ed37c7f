//! Localised labels used by the partitioner.
//!
//! The only label the picker needs is the default-group section title; every
//! other header is a group name passed through unchanged.

use std::{borrow::Cow, collections::HashMap};

use once_cell::sync::Lazy;
use picker_domain::DEFAULT_GROUP_TITLE_KEY;

const FALLBACK_LANGUAGE: &str = "en";

static TRANSLATIONS: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let table: [(&str, &str); 6] = [
            ("en", "Default Group"),
            ("de", "Standardgruppe"),
            ("es", "Grupo predeterminado"),
            ("fr", "Groupe par défaut"),
            ("pt", "Grupo padrão"),
            ("zh", "默认分组"),
        ];
        table
            .into_iter()
            .map(|(language, label)| (language, HashMap::from([(DEFAULT_GROUP_TITLE_KEY, label)])))
            .collect()
    });

/// External text-lookup service.
pub trait TextLookup {
    /// Returns the label for `key`; implementations fall back to the key itself.
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

impl<F> TextLookup for F
where
    F: Fn(&str) -> String,
{
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(key))
    }
}

/// Static translation table resolved from a locale tag such as `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinText {
    language: &'static str,
    default_group_label: Option<String>,
}

impl Default for BuiltinText {
    fn default() -> Self {
        Self::for_locale(FALLBACK_LANGUAGE)
    }
}

impl BuiltinText {
    /// Picks the table for the locale's language; unknown languages use English.
    pub fn for_locale(locale: &str) -> Self {
        let requested = language_of(locale);
        let language = TRANSLATIONS
            .get_key_value(requested.as_str())
            .map(|(language, _)| *language)
            .unwrap_or(FALLBACK_LANGUAGE);
        Self {
            language,
            default_group_label: None,
        }
    }

    /// Pins the default-group title regardless of locale.
    pub fn with_override(mut self, label: impl Into<String>) -> Self {
        self.default_group_label = Some(label.into());
        self
    }

    pub fn language(&self) -> &str {
        self.language
    }
}

impl TextLookup for BuiltinText {
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        if key == DEFAULT_GROUP_TITLE_KEY {
            if let Some(label) = &self.default_group_label {
                return Cow::Borrowed(label.as_str());
            }
        }
        TRANSLATIONS
            .get(self.language)
            .and_then(|labels| labels.get(key))
            .map(|label| Cow::Borrowed(*label))
            .unwrap_or(Cow::Borrowed(key))
    }
}

fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_language_from_region_tagged_locale() {
        let text = BuiltinText::for_locale("pt-BR");
        assert_eq!(text.language(), "pt");
        assert_eq!(text.lookup(DEFAULT_GROUP_TITLE_KEY), "Grupo padrão");

        let text = BuiltinText::for_locale("zh_Hans");
        assert_eq!(text.lookup(DEFAULT_GROUP_TITLE_KEY), "默认分组");
    }

    #[test]
    fn unknown_locale_and_key_fall_back() {
        let text = BuiltinText::for_locale("xx-YY");
        assert_eq!(text.language(), "en");
        assert_eq!(text.lookup(DEFAULT_GROUP_TITLE_KEY), "Default Group");
        assert_eq!(text.lookup("Something Else"), "Something Else");
    }

    #[test]
    fn override_wins_over_table() {
        let text = BuiltinText::for_locale("de").with_override("Ohne Gruppe");
        assert_eq!(text.lookup(DEFAULT_GROUP_TITLE_KEY), "Ohne Gruppe");
    }

    #[test]
    fn closures_act_as_lookups() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.lookup("Default Group"), "DEFAULT GROUP");
    }
}

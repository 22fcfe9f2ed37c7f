use serde::{Deserialize, Serialize};

/// Stores user-configurable picker preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    /// Starts the picker on a private working copy instead of mirroring the
    /// caller's list.
    #[serde(default)]
    pub editable_selection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Replaces the localised default-group title when set.
    pub default_group_label: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
            editable_selection: false,
            default_group_label: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Colour is used only when enabled and plain output is not requested.
    pub fn use_color(&self) -> bool {
        self.ui_color_enabled && !self.accessibility.plain_output
    }

    /// The label override, ignoring blank values.
    pub fn default_group_label(&self) -> Option<&str> {
        self.default_group_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
}

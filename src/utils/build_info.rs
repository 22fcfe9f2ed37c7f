//! Build stamp embedded by `build.rs`.

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy)]
pub struct BuildStamp {
    pub version: &'static str,
    /// Short commit hash, `-dirty` when built from a modified tree.
    pub git: &'static str,
    pub built_at: &'static str,
    pub target: &'static str,
    pub rustc: &'static str,
}

impl BuildStamp {
    /// Label and value pairs in the order `version` prints them.
    pub fn details(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Commit", self.git),
            ("Built at", self.built_at),
            ("Target", self.target),
            ("Rustc", self.rustc),
        ]
    }
}

fn or_unknown(value: Option<&'static str>) -> &'static str {
    value.filter(|value| !value.is_empty()).unwrap_or(UNKNOWN)
}

pub fn current() -> BuildStamp {
    BuildStamp {
        version: env!("CARGO_PKG_VERSION"),
        git: or_unknown(option_env!("ITEM_PICKER_GIT")),
        built_at: or_unknown(option_env!("ITEM_PICKER_BUILT_AT")),
        target: or_unknown(option_env!("ITEM_PICKER_TARGET")),
        rustc: or_unknown(option_env!("ITEM_PICKER_RUSTC")),
    }
}

/// Caches the lower-cased form of the live search text.
#[derive(Debug, Clone, Default)]
pub struct SearchNormalizer {
    raw: String,
    normalized: String,
    revision: u64,
}

impl SearchNormalizer {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let normalized = raw.to_lowercase();
        Self {
            raw,
            normalized,
            revision: 0,
        }
    }

    /// Stores new search text; returns `false` when the value is unchanged.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.raw {
            return false;
        }
        self.normalized = text.to_lowercase();
        self.raw = text;
        self.revision += 1;
        true
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether the search branch of the visibility predicates applies.
    pub fn is_active(&self) -> bool {
        !self.normalized.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

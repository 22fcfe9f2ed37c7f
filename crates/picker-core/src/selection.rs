use std::collections::HashSet;

use crate::CoreError;

/// Where the active selection list lives, fixed for the lifetime of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Mirrors a list owned by the host; the picker never edits it.
    External,
    /// Works on a private copy seeded once at construction.
    Owned,
}

impl SelectionMode {
    pub fn from_editable(editable: bool) -> Self {
        if editable {
            SelectionMode::Owned
        } else {
            SelectionMode::External
        }
    }
}

/// Presence map of selected item identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedItemIds {
    ids: HashSet<String>,
}

impl SelectedItemIds {
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ids: ids.into_iter().map(|id| id.as_ref().to_string()).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// Tracks which items are chosen and derives the presence map from the
/// active list whenever it changes.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    mode: SelectionMode,
    model_value: Vec<String>,
    selected: SelectedItemIds,
    revision: u64,
}

impl SelectionTracker {
    pub fn new<I, S>(mode: SelectionMode, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut model_value: Vec<String> = initial.into_iter().map(Into::into).collect();
        if mode == SelectionMode::Owned {
            dedup_in_place(&mut model_value);
        }
        let selected = SelectedItemIds::from_ids(&model_value);
        Self {
            mode,
            model_value,
            selected,
            revision: 0,
        }
    }

    pub fn external<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SelectionMode::External, ids)
    }

    pub fn owned<I, S>(initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SelectionMode::Owned, initial)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_editable(&self) -> bool {
        self.mode == SelectionMode::Owned
    }

    /// The active list: the host's list in external mode, the working copy otherwise.
    pub fn model_value(&self) -> &[String] {
        &self.model_value
    }

    pub fn selected_item_ids(&self) -> &SelectedItemIds {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mirrors a new host list. Ignored in owned mode, where the working copy
    /// is independent of the host after construction.
    pub fn sync_external<I, S>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.mode == SelectionMode::Owned {
            tracing::debug!("ignoring external selection update for an owned working copy");
            return false;
        }
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids == self.model_value {
            return false;
        }
        self.model_value = ids;
        self.refresh();
        true
    }

    pub fn select(&mut self, id: &str) -> Result<bool, CoreError> {
        self.ensure_editable()?;
        if self.selected.contains(id) {
            return Ok(false);
        }
        self.model_value.push(id.to_string());
        self.refresh();
        Ok(true)
    }

    pub fn deselect(&mut self, id: &str) -> Result<bool, CoreError> {
        self.ensure_editable()?;
        if !self.selected.contains(id) {
            return Ok(false);
        }
        self.model_value.retain(|existing| existing != id);
        self.refresh();
        Ok(true)
    }

    /// Flips membership of `id`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> Result<bool, CoreError> {
        if self.is_selected(id) {
            self.deselect(id)?;
            Ok(false)
        } else {
            self.select(id)?;
            Ok(true)
        }
    }

    pub fn set_selection<I, S>(&mut self, ids: I) -> Result<bool, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ensure_editable()?;
        let mut ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        dedup_in_place(&mut ids);
        if ids == self.model_value {
            return Ok(false);
        }
        self.model_value = ids;
        self.refresh();
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<bool, CoreError> {
        self.ensure_editable()?;
        if self.model_value.is_empty() {
            return Ok(false);
        }
        self.model_value.clear();
        self.refresh();
        Ok(true)
    }

    /// Hands back the working copy so the host can commit it.
    pub fn working_copy(&self) -> Option<&[String]> {
        match self.mode {
            SelectionMode::Owned => Some(&self.model_value),
            SelectionMode::External => None,
        }
    }

    fn ensure_editable(&self) -> Result<(), CoreError> {
        if self.mode == SelectionMode::External {
            tracing::warn!("rejected edit of a read-only selection");
            return Err(CoreError::ReadOnlySelection);
        }
        Ok(())
    }

    fn refresh(&mut self) {
        self.selected = SelectedItemIds::from_ids(&self.model_value);
        self.revision += 1;
    }
}

fn dedup_in_place(ids: &mut Vec<String>) {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}

//! The selection view builder ties selection, search, and the partitioner
//! together and memoises both derived views.

use picker_domain::ViewRow;

use crate::{
    partition::{build_view, VisibilityFilter},
    search::SearchNormalizer,
    selection::{SelectedItemIds, SelectionMode, SelectionTracker},
    source::ItemSource,
    text::{BuiltinText, TextLookup},
    CoreError,
};

/// Revisions of every input a derived view depends on.
///
/// The source is identified by address as well as revision, so handing the
/// builder a different source never yields rows cached for the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewKey {
    selection: u64,
    search: u64,
    source_addr: usize,
    source: u64,
}

#[derive(Debug, Default)]
struct ViewCache {
    key: Option<ViewKey>,
    rows: Vec<ViewRow>,
}

impl ViewCache {
    fn get_or_rebuild<F>(&mut self, key: ViewKey, label: &str, build: F) -> &[ViewRow]
    where
        F: FnOnce() -> Vec<ViewRow>,
    {
        if self.key != Some(key) {
            self.rows = build();
            self.key = Some(key);
            tracing::debug!(view = label, rows = self.rows.len(), "rebuilt selection view");
        }
        &self.rows
    }

    fn invalidate(&mut self) {
        self.key = None;
    }
}

/// Prepares the rows of a transaction-item picker.
///
/// The builder owns the selection and the search text; the item source is
/// passed to each view accessor so the host stays free to mutate it between
/// reads. Views are rebuilt only when one of their inputs changed.
#[derive(Debug)]
pub struct SelectionViewBuilder<L: TextLookup = BuiltinText> {
    selection: SelectionTracker,
    search: SearchNormalizer,
    lookup: L,
    all_items: ViewCache,
    filtered_items: ViewCache,
}

impl<L: TextLookup> SelectionViewBuilder<L> {
    /// `editable` picks the selection mode once: `false` mirrors
    /// `model_value`, `true` works on a private copy of it.
    pub fn new<I, S>(model_value: I, editable: bool, lookup: L) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_mode(SelectionMode::from_editable(editable), model_value, lookup)
    }

    pub fn with_mode<I, S>(mode: SelectionMode, model_value: I, lookup: L) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selection: SelectionTracker::new(mode, model_value),
            search: SearchNormalizer::default(),
            lookup,
            all_items: ViewCache::default(),
            filtered_items: ViewCache::default(),
        }
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selected_item_ids(&self) -> &SelectedItemIds {
        self.selection.selected_item_ids()
    }

    /// Forwards the host's latest selected-id list (external mode only).
    pub fn sync_model_value<I, S>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.sync_external(ids)
    }

    pub fn select(&mut self, id: &str) -> Result<bool, CoreError> {
        self.selection.select(id)
    }

    pub fn deselect(&mut self, id: &str) -> Result<bool, CoreError> {
        self.selection.deselect(id)
    }

    pub fn toggle(&mut self, id: &str) -> Result<bool, CoreError> {
        self.selection.toggle(id)
    }

    pub fn set_selection<I, S>(&mut self, ids: I) -> Result<bool, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.set_selection(ids)
    }

    pub fn clear_selection(&mut self) -> Result<bool, CoreError> {
        self.selection.clear()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        self.search.set_text(text)
    }

    pub fn search_text(&self) -> &str {
        self.search.raw()
    }

    pub fn normalized_search_text(&self) -> &str {
        self.search.normalized()
    }

    pub fn text_lookup(&self) -> &L {
        &self.lookup
    }

    pub fn set_text_lookup(&mut self, lookup: L) {
        self.lookup = lookup;
        self.all_items.invalidate();
        self.filtered_items.invalidate();
    }

    /// Every item that may be shown at all: visible, selected, or revealed by
    /// the current search.
    pub fn all_items_with_group_header<S>(&mut self, source: &S) -> &[ViewRow]
    where
        S: ItemSource + ?Sized,
    {
        let key = self.view_key(source);
        let filter = VisibilityFilter::new(
            self.selection.selected_item_ids(),
            self.search.normalized(),
        );
        let lookup = &self.lookup;
        self.all_items.get_or_rebuild(key, "all", || {
            build_view(source, lookup, |item| filter.always_visible(item))
        })
    }

    /// The rows to render for the current search text.
    pub fn filtered_items_with_group_header<S>(&mut self, source: &S) -> &[ViewRow]
    where
        S: ItemSource + ?Sized,
    {
        let key = self.view_key(source);
        let filter = VisibilityFilter::new(
            self.selection.selected_item_ids(),
            self.search.normalized(),
        );
        let lookup = &self.lookup;
        self.filtered_items.get_or_rebuild(key, "filtered", || {
            build_view(source, lookup, |item| filter.search_filtered(item))
        })
    }

    fn view_key<S>(&self, source: &S) -> ViewKey
    where
        S: ItemSource + ?Sized,
    {
        ViewKey {
            selection: self.selection.revision(),
            search: self.search.revision(),
            source_addr: source as *const S as *const () as usize,
            source: source.revision(),
        }
    }
}

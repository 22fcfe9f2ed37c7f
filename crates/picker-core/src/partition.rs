//! Group partitioner: turns an item source into header-annotated view rows.

use picker_domain::{
    TransactionItem, ViewRow, DEFAULT_GROUP_TITLE_KEY, DEFAULT_ITEM_GROUP_ID,
};

use crate::{selection::SelectedItemIds, source::ItemSource, text::TextLookup};

/// Walks the default bucket first, then every declared group in source order,
/// emitting a header followed by the items that pass `predicate`.
///
/// Sections where nothing survives are dropped entirely. Items keep their
/// bucket order, and items whose group is not declared by the source are
/// never emitted.
pub fn build_view<S, L, F>(source: &S, lookup: &L, mut predicate: F) -> Vec<ViewRow>
where
    S: ItemSource + ?Sized,
    L: TextLookup + ?Sized,
    F: FnMut(&TransactionItem) -> bool,
{
    let mut rows = Vec::new();

    if let Some(items) = source.items_in_group(DEFAULT_ITEM_GROUP_ID) {
        push_section(
            &mut rows,
            || lookup.lookup(DEFAULT_GROUP_TITLE_KEY).into_owned(),
            items,
            &mut predicate,
        );
    }

    for group in source.groups() {
        // The default bucket has already been emitted ahead of every group.
        if group.is_default() {
            continue;
        }
        let Some(items) = source.items_in_group(&group.id) else {
            continue;
        };
        push_section(&mut rows, || group.name.clone(), items, &mut predicate);
    }

    rows
}

fn push_section<T, F>(rows: &mut Vec<ViewRow>, title: T, items: &[TransactionItem], predicate: &mut F)
where
    T: FnOnce() -> String,
    F: FnMut(&TransactionItem) -> bool,
{
    if items.is_empty() {
        return;
    }
    let visible: Vec<&TransactionItem> = items.iter().filter(|item| predicate(item)).collect();
    if visible.is_empty() {
        return;
    }
    rows.push(ViewRow::header(title()));
    rows.extend(visible.into_iter().cloned().map(ViewRow::Item));
}

/// Visibility rules shared by the two derived views.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityFilter<'a> {
    selected: &'a SelectedItemIds,
    search: &'a str,
}

impl<'a> VisibilityFilter<'a> {
    /// `normalized_search` must already be lower-cased.
    pub fn new(selected: &'a SelectedItemIds, normalized_search: &'a str) -> Self {
        Self {
            selected,
            search: normalized_search,
        }
    }

    fn shown_without_search(&self, item: &TransactionItem) -> bool {
        !item.hidden || self.selected.contains(&item.id)
    }

    /// Broad view: a search match also reveals hidden items so they can be
    /// found and selected.
    pub fn always_visible(&self, item: &TransactionItem) -> bool {
        if self.shown_without_search(item) {
            return true;
        }
        !self.search.is_empty() && item.name_contains_lowercase(self.search)
    }

    /// Rendered view: a search match never bypasses the hidden flag.
    pub fn search_filtered(&self, item: &TransactionItem) -> bool {
        if self.search.is_empty() {
            return self.shown_without_search(item);
        }
        item.name_contains_lowercase(self.search) && self.shown_without_search(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_domain::{view_item_ids, TransactionItemGroup};

    use crate::{catalog::ItemCatalog, text::BuiltinText};

    fn catalog() -> ItemCatalog {
        ItemCatalog::new(
            vec![
                TransactionItem::new("a", "Coffee"),
                TransactionItem::new("b", "Rent").hidden(true).in_group("g1"),
                TransactionItem::new("c", "Water").in_group("g1"),
                TransactionItem::new("d", "Orphan").in_group("missing"),
            ],
            vec![
                TransactionItemGroup::new("g1", "Bills"),
                TransactionItemGroup::new("g2", "Empty"),
            ],
        )
        .expect("valid catalog")
    }

    #[test]
    fn default_section_comes_first_with_looked_up_title() {
        let rows = build_view(&catalog(), &BuiltinText::for_locale("de"), |_| true);
        assert_eq!(rows[0].header_title(), Some("Standardgruppe"));
        assert_eq!(rows[1].as_item().map(|item| item.id.as_str()), Some("a"));
        assert_eq!(rows[2].header_title(), Some("Bills"));
        assert_eq!(view_item_ids(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_sections_and_undeclared_groups_emit_nothing() {
        let rows = build_view(&catalog(), &BuiltinText::default(), |item| item.id == "c");
        assert_eq!(
            rows,
            vec![
                ViewRow::header("Bills"),
                ViewRow::Item(TransactionItem::new("c", "Water").in_group("g1")),
            ]
        );
    }

    #[test]
    fn nothing_passing_yields_empty_view() {
        let rows = build_view(&catalog(), &BuiltinText::default(), |_| false);
        assert!(rows.is_empty());
    }

    #[test]
    fn always_visible_grants_hidden_items_on_search_match() {
        let selected = SelectedItemIds::default();
        let rent = TransactionItem::new("b", "Rent").hidden(true);

        assert!(!VisibilityFilter::new(&selected, "").always_visible(&rent));
        assert!(VisibilityFilter::new(&selected, "ren").always_visible(&rent));
        assert!(!VisibilityFilter::new(&selected, "ren").search_filtered(&rent));
    }

    #[test]
    fn selection_overrides_hidden_in_both_views() {
        let selected = SelectedItemIds::from_ids(["b"]);
        let rent = TransactionItem::new("b", "Rent").hidden(true);
        let filter = VisibilityFilter::new(&selected, "");

        assert!(filter.always_visible(&rent));
        assert!(filter.search_filtered(&rent));
        assert!(!VisibilityFilter::new(&selected, "coffee").search_filtered(&rent));
    }
}

use std::cell::Cell;

use picker_domain::{
    view_item_ids, TransactionItem, TransactionItemGroup, ViewRow, DEFAULT_ITEM_GROUP_ID,
};

use crate::{
    catalog::ItemCatalog, source::ItemSource, text::BuiltinText, CoreError,
    SelectionViewBuilder,
};

fn coffee_and_rent() -> ItemCatalog {
    ItemCatalog::new(
        vec![
            TransactionItem::new("a", "Coffee"),
            TransactionItem::new("b", "Rent").hidden(true).in_group("g1"),
        ],
        vec![TransactionItemGroup::new("g1", "Bills")],
    )
    .expect("valid catalog")
}

fn coffee() -> ViewRow {
    ViewRow::Item(TransactionItem::new("a", "Coffee"))
}

fn rent() -> ViewRow {
    ViewRow::Item(TransactionItem::new("b", "Rent").hidden(true).in_group("g1"))
}

#[test]
fn hidden_unselected_item_is_excluded_from_both_views() {
    let catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());

    let expected = vec![ViewRow::header("Default Group"), coffee()];
    assert_eq!(builder.all_items_with_group_header(&catalog), expected.as_slice());
    assert_eq!(
        builder.filtered_items_with_group_header(&catalog),
        expected.as_slice()
    );
}

#[test]
fn selected_hidden_item_appears_in_both_views() {
    let catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(["b"], false, BuiltinText::default());

    let expected = vec![
        ViewRow::header("Default Group"),
        coffee(),
        ViewRow::header("Bills"),
        rent(),
    ];
    assert_eq!(builder.all_items_with_group_header(&catalog), expected.as_slice());
    assert_eq!(
        builder.filtered_items_with_group_header(&catalog),
        expected.as_slice()
    );
}

#[test]
fn search_reveals_hidden_item_only_in_all_items_view() {
    let catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());
    builder.set_search_text("rent");

    assert_eq!(
        builder.all_items_with_group_header(&catalog),
        [
            ViewRow::header("Default Group"),
            coffee(),
            ViewRow::header("Bills"),
            rent(),
        ]
        .as_slice()
    );
    assert!(builder.filtered_items_with_group_header(&catalog).is_empty());
}

#[test]
fn search_is_case_insensitive_in_filtered_view() {
    let catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());
    builder.set_search_text("COF");

    assert_eq!(builder.normalized_search_text(), "cof");
    assert_eq!(
        builder.filtered_items_with_group_header(&catalog),
        [ViewRow::header("Default Group"), coffee()].as_slice()
    );
}

#[test]
fn default_section_leads_even_when_declared_group_sorts_first() {
    let catalog = ItemCatalog::new(
        vec![
            TransactionItem::new("x", "Groceries").in_group("g0").with_display_order(-10),
            TransactionItem::new("y", "Snacks").with_display_order(99),
        ],
        vec![TransactionItemGroup::new("g0", "Food").with_display_order(-100)],
    )
    .expect("valid catalog");
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());

    let rows = builder.filtered_items_with_group_header(&catalog);
    assert_eq!(rows[0].header_title(), Some("Default Group"));
    assert_eq!(rows[2].header_title(), Some("Food"));
    assert_eq!(view_item_ids(rows), vec!["y", "x"]);
}

#[test]
fn surviving_items_keep_bucket_order() {
    let names = ["Alpha", "beta", "ALPINE", "Gamma", "alps"];
    let items = names
        .iter()
        .enumerate()
        .map(|(index, name)| TransactionItem::new(format!("i{index}"), *name).in_group("g1"))
        .collect();
    let catalog = ItemCatalog::new(items, vec![TransactionItemGroup::new("g1", "Letters")])
        .expect("valid catalog");
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());
    builder.set_search_text("alp");

    let rows = builder.filtered_items_with_group_header(&catalog);
    assert_eq!(view_item_ids(rows), vec!["i0", "i2", "i4"]);
}

#[test]
fn editable_selection_drives_views() {
    let catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), true, BuiltinText::default());

    assert!(builder.select("b").expect("editable"));
    assert_eq!(
        view_item_ids(builder.filtered_items_with_group_header(&catalog)),
        vec!["a", "b"]
    );

    assert!(!builder.toggle("b").expect("editable"));
    assert_eq!(
        view_item_ids(builder.filtered_items_with_group_header(&catalog)),
        vec!["a"]
    );
    assert_eq!(builder.selection().working_copy(), Some(&[][..]));
}

#[test]
fn external_selection_follows_host_and_rejects_edits() {
    let catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());

    assert!(matches!(builder.select("b"), Err(CoreError::ReadOnlySelection)));
    assert!(builder.sync_model_value(["b"]));
    assert!(builder.selected_item_ids().contains("b"));
    assert_eq!(
        view_item_ids(builder.all_items_with_group_header(&catalog)),
        vec!["a", "b"]
    );
}

#[test]
fn source_changes_invalidate_cached_views() {
    let mut catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());
    assert_eq!(
        view_item_ids(builder.filtered_items_with_group_header(&catalog)),
        vec!["a"]
    );

    catalog.set_hidden("b", false).expect("known item");
    assert_eq!(
        view_item_ids(builder.filtered_items_with_group_header(&catalog)),
        vec!["a", "b"]
    );
}

#[test]
fn lookup_changes_retitle_default_section() {
    let catalog = coffee_and_rent();
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());
    assert_eq!(
        builder.all_items_with_group_header(&catalog)[0].header_title(),
        Some("Default Group")
    );

    builder.set_text_lookup(BuiltinText::for_locale("fr"));
    assert_eq!(
        builder.all_items_with_group_header(&catalog)[0].header_title(),
        Some("Groupe par défaut")
    );
}

/// Counts how often the partitioner walks the source.
struct CountingSource {
    inner: ItemCatalog,
    walks: Cell<usize>,
}

impl ItemSource for CountingSource {
    fn items_in_group(&self, group_id: &str) -> Option<&[TransactionItem]> {
        if group_id == DEFAULT_ITEM_GROUP_ID {
            self.walks.set(self.walks.get() + 1);
        }
        self.inner.items_in_group(group_id)
    }

    fn groups(&self) -> &[TransactionItemGroup] {
        self.inner.groups()
    }

    fn revision(&self) -> u64 {
        self.inner.revision()
    }
}

#[test]
fn views_are_memoised_until_an_input_changes() {
    let source = CountingSource {
        inner: coffee_and_rent(),
        walks: Cell::new(0),
    };
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), true, BuiltinText::default());

    builder.filtered_items_with_group_header(&source);
    builder.filtered_items_with_group_header(&source);
    assert_eq!(source.walks.get(), 1);

    assert!(!builder.set_search_text(""));
    builder.filtered_items_with_group_header(&source);
    assert_eq!(source.walks.get(), 1);

    builder.set_search_text("rent");
    builder.filtered_items_with_group_header(&source);
    assert_eq!(source.walks.get(), 2);

    builder.select("a").expect("editable");
    builder.filtered_items_with_group_header(&source);
    assert_eq!(source.walks.get(), 3);

    builder.all_items_with_group_header(&source);
    assert_eq!(source.walks.get(), 4);
}

/// Source whose revision never moves.
struct FrozenSource(ItemCatalog);

impl ItemSource for FrozenSource {
    fn items_in_group(&self, group_id: &str) -> Option<&[TransactionItem]> {
        self.0.items_in_group(group_id)
    }

    fn groups(&self) -> &[TransactionItemGroup] {
        self.0.groups()
    }

    fn revision(&self) -> u64 {
        0
    }
}

#[test]
fn switching_sources_rebuilds_even_with_equal_revisions() {
    let first = FrozenSource(coffee_and_rent());
    let second = FrozenSource(
        ItemCatalog::new(vec![TransactionItem::new("z", "Zebra")], Vec::new())
            .expect("valid catalog"),
    );
    let mut builder = SelectionViewBuilder::new(Vec::<String>::new(), false, BuiltinText::default());

    assert_eq!(
        view_item_ids(builder.filtered_items_with_group_header(&first)),
        vec!["a"]
    );
    assert_eq!(
        view_item_ids(builder.filtered_items_with_group_header(&second)),
        vec!["z"]
    );
    assert_eq!(
        view_item_ids(builder.all_items_with_group_header(&second)),
        vec!["z"]
    );
    assert_eq!(
        view_item_ids(builder.filtered_items_with_group_header(&first)),
        vec!["a"]
    );
}

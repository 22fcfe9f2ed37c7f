//! Rows of a derived, header-annotated item list.

use std::fmt;

use serde::Serialize;

use crate::item::TransactionItem;

/// One row of a rendered selection list: a section header or an item.
///
/// Headers carry no identity beyond their position; two headers may share a
/// title when a group is named like the default group's label.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewRow {
    #[serde(rename = "subheader")]
    Header { title: String },
    Item(TransactionItem),
}

impl ViewRow {
    pub fn header(title: impl Into<String>) -> Self {
        ViewRow::Header {
            title: title.into(),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, ViewRow::Header { .. })
    }

    pub fn as_item(&self) -> Option<&TransactionItem> {
        match self {
            ViewRow::Item(item) => Some(item),
            ViewRow::Header { .. } => None,
        }
    }

    pub fn header_title(&self) -> Option<&str> {
        match self {
            ViewRow::Header { title } => Some(title),
            ViewRow::Item(_) => None,
        }
    }
}

impl fmt::Display for ViewRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewRow::Header { title } => write!(f, "== {} ==", title),
            ViewRow::Item(item) => write!(f, "{} ({})", item.name, item.id),
        }
    }
}

/// Iterates the item rows of a view, skipping headers.
pub fn view_items(rows: &[ViewRow]) -> impl Iterator<Item = &TransactionItem> {
    rows.iter().filter_map(ViewRow::as_item)
}

/// Collects the item identifiers of a view in row order.
pub fn view_item_ids(rows: &[ViewRow]) -> Vec<&str> {
    view_items(rows).map(|item| item.id.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_rows_serialize_as_subheaders() {
        let json = serde_json::to_string(&ViewRow::header("Bills")).expect("serialize");
        assert_eq!(json, r#"{"type":"subheader","title":"Bills"}"#);
    }

    #[test]
    fn view_item_ids_skip_headers() {
        let rows = vec![
            ViewRow::header("Default Group"),
            ViewRow::Item(TransactionItem::new("a", "Coffee")),
            ViewRow::header("Bills"),
            ViewRow::Item(TransactionItem::new("b", "Rent")),
        ];
        assert_eq!(view_item_ids(&rows), vec!["a", "b"]);
        assert_eq!(rows[2].header_title(), Some("Bills"));
        assert!(rows[1].as_item().is_some());
    }
}

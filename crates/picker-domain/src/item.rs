//! Domain types representing selectable transaction items.

use serde::{Deserialize, Serialize};

use crate::{common::*, group::DEFAULT_ITEM_GROUP_ID};

/// A named entry the user can attach to a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "TransactionItem::default_group_id")]
    pub group_id: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TransactionItem {
    /// Creates a visible item placed in the default group.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hidden: false,
            group_id: Self::default_group_id(),
            display_order: 0,
            comment: None,
        }
    }

    pub fn default_group_id() -> String {
        DEFAULT_ITEM_GROUP_ID.to_string()
    }

    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns `true` when the item sits in the default/ungrouped bucket.
    pub fn is_ungrouped(&self) -> bool {
        self.group_id == DEFAULT_ITEM_GROUP_ID
    }

    /// Case-insensitive substring match against an already lower-cased needle.
    pub fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl Identifiable for TransactionItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for TransactionItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Ordered for TransactionItem {
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

impl Displayable for TransactionItem {
    fn display_label(&self) -> String {
        if self.hidden {
            format!("{} ({}) (hidden)", self.name, self.id)
        } else {
            format!("{} ({})", self.name, self.id)
        }
    }
}

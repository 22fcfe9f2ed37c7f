//! Domain types representing item groups.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Identifier of the sentinel bucket holding items without an explicit group.
pub const DEFAULT_ITEM_GROUP_ID: &str = "0";

/// Text-lookup key for the default bucket's section title.
pub const DEFAULT_GROUP_TITLE_KEY: &str = "Default Group";

/// A named section that orders and labels a subset of items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionItemGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

impl TransactionItemGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_order: 0,
        }
    }

    pub fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_ITEM_GROUP_ID
    }
}

impl Identifiable for TransactionItemGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for TransactionItemGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Ordered for TransactionItemGroup {
    fn display_order(&self) -> i32 {
        self.display_order
    }
}

impl Displayable for TransactionItemGroup {
    fn display_label(&self) -> String {
        self.name.clone()
    }
}

use std::{
    collections::{HashMap, HashSet},
    fs,
    ops::Range,
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};

use picker_domain::{TransactionItem, TransactionItemGroup, DEFAULT_ITEM_GROUP_ID};
use serde::{Deserialize, Serialize};

use crate::{source::ItemSource, CoreError};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Revisions are unique across every catalog in the process, so a cached view
/// built from one catalog never matches another.
fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub groups: Vec<TransactionItemGroup>,
    #[serde(default)]
    pub items: Vec<TransactionItem>,
}

/// In-memory item source bucketing items by group.
///
/// Items live in one vector kept sorted by group id, then display order, so
/// each bucket is a contiguous range of it.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<TransactionItem>,
    groups: Vec<TransactionItemGroup>,
    buckets: HashMap<String, Range<usize>>,
    index: HashMap<String, usize>,
    revision: u64,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            groups: Vec::new(),
            buckets: HashMap::new(),
            index: HashMap::new(),
            revision: next_revision(),
        }
    }
}

impl ItemCatalog {
    pub fn new(
        items: Vec<TransactionItem>,
        groups: Vec<TransactionItemGroup>,
    ) -> Result<Self, CoreError> {
        validate_groups(&groups)?;
        validate_items(&items)?;
        let mut catalog = Self {
            items,
            groups,
            buckets: HashMap::new(),
            index: HashMap::new(),
            revision: 0,
        };
        catalog.rebuild();
        Ok(catalog)
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self, CoreError> {
        Self::new(document.items, document.groups)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|err| CoreError::Serde(err.to_string()))?;
        Self::from_document(document)
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let data = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&data)?;
        tracing::debug!(
            path = %path.display(),
            items = catalog.items.len(),
            groups = catalog.groups.len(),
            "loaded item catalog"
        );
        Ok(catalog)
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            groups: self.groups.clone(),
            items: self.items.clone(),
        }
    }

    /// All items, grouped by group id and in display order within a group.
    pub fn items(&self) -> &[TransactionItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&TransactionItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn group(&self, id: &str) -> Option<&TransactionItemGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn add_item(&mut self, item: TransactionItem) -> Result<(), CoreError> {
        if self.item(&item.id).is_some() {
            return Err(CoreError::DuplicateItem(item.id));
        }
        self.items.push(item);
        self.rebuild();
        Ok(())
    }

    pub fn add_group(&mut self, group: TransactionItemGroup) -> Result<(), CoreError> {
        if group.is_default() {
            return Err(CoreError::ReservedGroupId(group.id));
        }
        if self.group(&group.id).is_some() {
            return Err(CoreError::DuplicateGroup(group.id));
        }
        self.groups.push(group);
        self.rebuild();
        Ok(())
    }

    pub fn remove_item(&mut self, id: &str) -> Option<TransactionItem> {
        let position = *self.index.get(id)?;
        let removed = self.items.remove(position);
        self.rebuild();
        Some(removed)
    }

    /// Updates the hidden flag; returns whether the flag actually changed.
    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> Result<bool, CoreError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        let item = &mut self.items[position];
        if item.hidden == hidden {
            return Ok(false);
        }
        item.hidden = hidden;
        // Ordering is untouched, so only the revision moves.
        self.revision = next_revision();
        Ok(true)
    }

    /// Re-sorts items and groups and recomputes bucket ranges. The sorts are
    /// stable, so ties keep insertion order.
    fn rebuild(&mut self) {
        self.groups.sort_by_key(|group| group.display_order);
        self.items.sort_by(|a, b| {
            a.group_id
                .cmp(&b.group_id)
                .then(a.display_order.cmp(&b.display_order))
        });

        self.buckets.clear();
        let mut start = 0;
        while start < self.items.len() {
            let group_id = &self.items[start].group_id;
            let len = self.items[start..]
                .iter()
                .take_while(|item| &item.group_id == group_id)
                .count();
            self.buckets.insert(group_id.clone(), start..start + len);
            start += len;
        }

        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();
        self.revision = next_revision();
    }
}

impl ItemSource for ItemCatalog {
    fn items_in_group(&self, group_id: &str) -> Option<&[TransactionItem]> {
        self.buckets
            .get(group_id)
            .map(|range| &self.items[range.clone()])
    }

    fn groups(&self) -> &[TransactionItemGroup] {
        &self.groups
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

fn validate_groups(groups: &[TransactionItemGroup]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for group in groups {
        if group.id == DEFAULT_ITEM_GROUP_ID {
            return Err(CoreError::ReservedGroupId(group.id.clone()));
        }
        if !seen.insert(group.id.as_str()) {
            return Err(CoreError::DuplicateGroup(group.id.clone()));
        }
    }
    Ok(())
}

fn validate_items(items: &[TransactionItem]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(CoreError::DuplicateItem(item.id.clone()));
        }
    }
    Ok(())
}

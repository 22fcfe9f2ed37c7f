//! picker-core
//!
//! Selection-list preparation for the transaction-item picker: selection
//! tracking, search normalisation, and the group partitioner that turns an
//! item source into header-annotated view rows.
//! Depends on picker-domain. No CLI, no terminal I/O.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod partition;
pub mod search;
pub mod selection;
pub mod source;
pub mod text;

pub use builder::SelectionViewBuilder;
pub use catalog::{CatalogDocument, ItemCatalog};
pub use error::CoreError;
pub use partition::{build_view, VisibilityFilter};
pub use search::SearchNormalizer;
pub use selection::{SelectedItemIds, SelectionMode, SelectionTracker};
pub use source::ItemSource;
pub use text::{BuiltinText, TextLookup};

#[cfg(test)]
mod tests;

//! Read-only contract between the picker and whatever owns items and groups.

use picker_domain::{TransactionItem, TransactionItemGroup};

/// Abstraction over the external provider of items and groups.
pub trait ItemSource {
    /// Items assigned to `group_id`, in the order the source wants them shown.
    /// The default bucket is addressed with `DEFAULT_ITEM_GROUP_ID`.
    fn items_in_group(&self, group_id: &str) -> Option<&[TransactionItem]>;

    /// Non-default groups in display order.
    fn groups(&self) -> &[TransactionItemGroup];

    /// Changes whenever the content visible through this trait changes.
    ///
    /// Values should be unique across every source in the process, not just
    /// within one source: views are cached per (address, revision) pair and a
    /// source dropped and replaced at the same address must not repeat an
    /// earlier revision.
    fn revision(&self) -> u64;
}

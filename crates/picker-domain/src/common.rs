//! Shared traits implemented by picker entities.

/// Exposes a stable identifier for entities owned by an item source.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Exposes the ordering hint a source uses when laying out entities.
pub trait Ordered {
    fn display_order(&self) -> i32;
}

//! picker-domain
//!
//! Pure domain models for the transaction-item picker (items, groups, view rows).
//! No I/O, no CLI, no storage. Only data types and shared traits.

pub mod common;
pub mod group;
pub mod item;
pub mod view;

pub use common::*;
pub use group::*;
pub use item::*;
pub use view::*;

//! `stockroom-core` — shared building blocks for the inventory widget.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{FormField, InventoryError, InventoryResult, ValidationError, ValidationIssue};
pub use id::ProductId;

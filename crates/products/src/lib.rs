//! Products domain module.
//!
//! This crate contains the inventory's business rules (product records, form
//! validation, the in-memory store, statistics, filtering), implemented purely as
//! deterministic domain logic (no IO, no presentation, no storage).

pub mod filter;
pub mod form;
pub mod money;
pub mod product;
pub mod seed;
pub mod stats;
pub mod store;

pub use filter::{FilterState, categories, filter};
pub use form::ProductForm;
pub use money::Money;
pub use product::{Product, ProductFields, StockStatus};
pub use stats::InventoryStats;
pub use store::ProductStore;

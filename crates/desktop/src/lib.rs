//! `stockroom-desktop`
//!
//! **Responsibility:** the presentation-facing side of the inventory widget.
//!
//! This crate provides:
//! - the table renderer (rows, status badges, empty state)
//! - the add/edit form controller
//! - [`InventoryApp`], the single owned view model that a front end drives
//!
//! It never draws anything itself; front ends (the `stockroom` CLI, or any GUI
//! shell) render the plain data it returns.

pub mod app;
pub mod form;
pub mod table;
pub mod types;

pub use app::InventoryApp;
pub use form::{EditingContext, FormController, FormState};
pub use table::{ProductRow, StatusBadge, TableView, render_table, status_badge};
pub use types::{ALL_CATEGORIES_LABEL, CategoryOption, DisplayOptions, ViewUpdate};

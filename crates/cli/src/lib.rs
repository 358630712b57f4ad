//! `stockroom-cli` — terminal front end for the inventory widget.
//!
//! The shell reads one command per line and renders the view model's output as
//! tables (or JSON with `--json`).

pub mod cli;
pub mod render;
pub mod shell;

// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - items_after_statements: Output structs are clearer near their usage
// - option_if_let_else: if-let is often clearer
// - needless_pass_by_value: Sometimes clearer semantically
// - trivially_copy_pass_by_ref: Minor optimization not worth churn
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::items_after_statements,
    clippy::option_if_let_else,
    clippy::needless_pass_by_value,
    clippy::trivially_copy_pass_by_ref
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod indexer;
pub mod ingest;
pub mod models;
pub mod operations;
pub mod store;

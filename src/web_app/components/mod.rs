// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Small shared pieces (Loading, icons)
// - book.rs: Shopping list entries and the list container
// - pagination.rs: Signal-backed pagination widget and its controls
// - catalog.rs: Catalog entries, list and the "Show Books" button

pub mod common;
pub mod book;
pub mod pagination;
pub mod catalog;

pub use common::*;
pub use book::*;
pub use pagination::*;
pub use catalog::*;

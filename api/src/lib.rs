//! Platform-independent core of the emoji catalog widget.
//!
//! Nothing in here touches the DOM. The `ui` crate supplies browser
//! implementations of the capability traits and displays whatever
//! [`controller::ViewContext`] commits.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod layout;
pub mod prefs;
pub mod source;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::SymbolCatalog;
pub use controller::ViewContext;
pub use error::CatalogError;
pub use layout::Layout;

//! Library crate for ghuser-search.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Debounce primitive for the search input (`debounce`)
//! - Fetch-boundary error types (`error`)
//! - GitHub user data access (`github`)
//! - Request state container with subscriptions (`store`)
//! - View selection and rendering (`view`, `ui`)
//!
//! It is used by the `ghuser-search` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod debounce;
pub mod error;
pub mod github;
pub mod store;
pub mod ui;
pub mod view;

// Re-export commonly used items at the crate root for convenience
/// Normalized error types produced at the fetch boundary.
pub use error::{ErrorInfo, FetchError};

#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Presentation helpers shared by eggwatch events.
//!
//! Everything here is a pure function of its inputs (the current instant
//! is always passed in), plus the default collaborators: an English
//! [`LocaleTable`] and an in-memory [`MemoryCache`].

pub mod cache;
pub mod emoji;
mod error;
pub mod geo;
pub mod locale;
pub mod time;

pub use cache::MemoryCache;
pub use error::{LoadError, Result};
pub use locale::LocaleTable;

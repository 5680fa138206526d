//! Terminal report formatting for the `fetch` front-end.

pub mod format;

pub use format::*;

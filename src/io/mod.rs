//! Input helpers.
//!
//! - injected-data JSON files (`inject`)

pub mod inject;

pub use inject::*;

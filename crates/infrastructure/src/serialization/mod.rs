//! JSON serialization for settings files.
//!
//! Output uses 2-space indentation and a trailing newline.

mod json;

pub use json::*;

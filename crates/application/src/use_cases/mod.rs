//! Use cases
//!
//! Application operations built on the template resolver.

mod resolve_message;

pub use resolve_message::ResolveMessage;

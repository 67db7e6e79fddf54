//! Topic Lab Application - Template engine, use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (clock, random source, settings store)
//! - The template resolver (parser, builtins, substitution engine)
//! - Use case orchestration for message templates
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod template_resolver;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, RandomSource, SettingsStore};
pub use template_resolver::{BuiltinInfo, TemplateResolver, is_builtin};
pub use use_cases::ResolveMessage;

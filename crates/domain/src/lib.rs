//! Topic Lab Domain - Core template types
//!
//! This crate defines the domain model for topic and payload templates.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod message;
pub mod settings;
pub mod template;

pub use error::{DomainError, DomainResult};
pub use message::{MessageTemplate, QoS, ResolvedMessage, TemplateHints};
pub use settings::{MAX_SUBSTITUTION_PASSES, ResolverSettings};
pub use template::{
    Expression, Modifier, Offset, OffsetUnit, PresetFormat, RangeSpec, TimeZone, VariableMap,
    is_valid_variable_name, validate_variable_name,
};

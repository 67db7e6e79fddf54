//! Template expression domain types
//!
//! A template is literal text interleaved with `{name}` or
//! `{name:modifier:...}` expressions. These types describe one parsed
//! expression and the modifiers a builtin can interpret.

mod expression;
mod modifier;

use std::collections::HashMap;

pub use expression::{Expression, is_valid_variable_name, validate_variable_name};
pub use modifier::{Modifier, Offset, OffsetUnit, PresetFormat, RangeSpec, TimeZone};

/// User-defined variables, keyed by name.
pub type VariableMap = HashMap<String, String>;

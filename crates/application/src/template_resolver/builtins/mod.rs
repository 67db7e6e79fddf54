//! Built-in dynamic variables
//!
//! Reserved names whose values are computed on every resolution. Builtins
//! always shadow user variables of the same name.

pub mod random;
pub mod time;
pub mod unique_id;

use topiclab_domain::{Expression, RangeSpec};
use tracing::trace;

use crate::ports::{Clock, RandomSource};

/// The closed set of builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `now`, alias `timestamp`.
    Now,
    /// `uuid`.
    Uuid,
    /// `random`, alias `rand`.
    Random,
}

impl Builtin {
    /// Looks up a builtin by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "now" | "timestamp" => Some(Self::Now),
            "uuid" => Some(Self::Uuid),
            "random" | "rand" => Some(Self::Random),
            _ => None,
        }
    }
}

/// Returns whether the name is reserved for a builtin.
///
/// Uses the same case-insensitive lookup as resolution, so `{NOW}` is both
/// reported as a builtin and resolved as one.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    Builtin::from_name(name).is_some()
}

/// Information about a built-in variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinInfo {
    /// Canonical name.
    pub name: &'static str,
    /// Alternative names resolving to the same builtin.
    pub aliases: &'static [&'static str],
    /// Human-readable description, including accepted modifiers.
    pub description: &'static str,
    /// Example expression and output.
    pub example: &'static str,
}

/// Returns every builtin with help text for the editor.
#[must_use]
pub fn available() -> Vec<BuiltinInfo> {
    vec![
        BuiltinInfo {
            name: "now",
            aliases: &["timestamp"],
            description: "Current time. Modifiers: utc|local, iso|unix|unixms|date|time|datetime, \
                          fmt:<pattern>, offsets like +1h or -1M",
            example: "{now:utc:datetime} -> 2024-06-15 10:30:45",
        },
        BuiltinInfo {
            name: "uuid",
            aliases: &[],
            description: "Random UUID v4",
            example: "{uuid} -> 550e8400-e29b-41d4-a716-446655440000",
        },
        BuiltinInfo {
            name: "random",
            aliases: &["rand"],
            description: "Random integer, 0-100 unless a min-max modifier is given",
            example: "{random:1-10} -> 7",
        },
    ]
}

/// Dispatches builtin names to their resolvers.
#[derive(Clone, Copy)]
pub struct BuiltinRegistry<'a> {
    clock: &'a dyn Clock,
    random: &'a dyn RandomSource,
    default_range: RangeSpec,
}

impl<'a> BuiltinRegistry<'a> {
    /// Creates a registry over the given capabilities.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, random: &'a dyn RandomSource, default_range: RangeSpec) -> Self {
        Self {
            clock,
            random,
            default_range,
        }
    }

    /// Resolves an expression naming a builtin.
    /// Returns None if the name is not a builtin.
    #[must_use]
    pub fn resolve(&self, expression: &Expression) -> Option<String> {
        let builtin = Builtin::from_name(&expression.name)?;
        let modifiers = expression.parsed_modifiers();

        for ignored in modifiers.iter().filter(|m| m.is_unrecognized()) {
            trace!(builtin = %expression.name, modifier = ?ignored, "ignoring unrecognized modifier");
        }

        let value = match builtin {
            Builtin::Now => time::resolve(self.clock, &modifiers),
            Builtin::Uuid => unique_id::generate(self.random),
            Builtin::Random => random::resolve(self.random, &modifiers, self.default_range),
        };
        Some(value)
    }
}

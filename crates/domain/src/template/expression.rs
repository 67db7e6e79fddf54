//! Parsed template expressions

use super::modifier::Modifier;
use crate::error::{DomainError, DomainResult};

/// The content of one `{...}` occurrence: a name plus ordered modifier tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The variable or builtin name.
    pub name: String,

    /// Raw modifier tokens in the order they appeared.
    pub modifiers: Vec<String>,
}

impl Expression {
    /// Creates an expression from a name and raw modifier tokens.
    #[must_use]
    pub fn new(name: impl Into<String>, modifiers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            modifiers,
        }
    }

    /// Returns true if any modifier follows the name.
    #[must_use]
    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Classifies every raw modifier token.
    #[must_use]
    pub fn parsed_modifiers(&self) -> Vec<Modifier> {
        self.modifiers.iter().map(|m| Modifier::parse(m)).collect()
    }
}

/// Returns true if `name` can appear inside a template expression.
///
/// Valid names start with an ASCII letter or underscore, followed by ASCII
/// letters, digits or underscores.
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates a variable name before it is stored.
///
/// # Errors
///
/// Returns `DomainError::InvalidVariableName` if the name could never be
/// matched by a template expression.
pub fn validate_variable_name(name: &str) -> DomainResult<()> {
    if is_valid_variable_name(name) {
        Ok(())
    } else {
        Err(DomainError::InvalidVariableName(name.to_string()))
    }
}

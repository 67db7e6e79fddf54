//! Template resolution engine
//!
//! Substitutes `{name}` and `{builtin:modifiers}` expressions, re-scanning
//! the output until it stops changing or the pass limit is reached.

use std::sync::Arc;

use topiclab_domain::{Expression, ResolverSettings, VariableMap};
use tracing::{debug, trace};

use super::builtins::{BuiltinRegistry, is_builtin};
use super::parser::{has_expressions, parse_template};
use crate::ports::{Clock, RandomSource};

/// The template resolution engine.
///
/// Holds no per-call state, so one instance can be shared behind an `Arc`.
/// Resolution never fails: anything that cannot be resolved is left in the
/// output verbatim, braces included.
pub struct TemplateResolver {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    settings: ResolverSettings,
}

impl TemplateResolver {
    /// Creates a resolver with default settings.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            clock,
            random,
            settings: ResolverSettings::default(),
        }
    }

    /// Replaces the resolver settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Returns a builtin registry bound to this resolver's capabilities.
    #[must_use]
    pub fn builtins(&self) -> BuiltinRegistry<'_> {
        BuiltinRegistry::new(
            self.clock.as_ref(),
            self.random.as_ref(),
            self.settings.default_random_range(),
        )
    }

    /// Resolves every expression in `template`.
    ///
    /// Builtins are always computed, even if `variables` defines the same
    /// name. Other names are substituted only when they carry no modifiers
    /// and exist in `variables`. Variable values may themselves contain
    /// expressions; those are resolved on later passes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use chrono::{DateTime, Utc};
    /// # use topiclab_application::ports::{Clock, RandomSource};
    /// # use topiclab_application::template_resolver::TemplateResolver;
    /// # use topiclab_domain::VariableMap;
    /// # struct Epoch;
    /// # impl Clock for Epoch { fn now(&self) -> DateTime<Utc> { DateTime::from_timestamp(0, 0).unwrap() } }
    /// # struct Zero;
    /// # impl RandomSource for Zero {
    /// #     fn fill_bytes(&self, dest: &mut [u8]) { dest.fill(0) }
    /// #     fn range_inclusive(&self, min: u64, _max: u64) -> u64 { min }
    /// # }
    /// let resolver = TemplateResolver::new(Arc::new(Epoch), Arc::new(Zero));
    /// let mut vars = VariableMap::new();
    /// vars.insert("device_id".to_string(), "abc123".to_string());
    ///
    /// assert_eq!(
    ///     resolver.resolve("devices/{device_id}/{now:unix}/+", &vars),
    ///     "devices/abc123/0/+"
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, template: &str, variables: &VariableMap) -> String {
        if !has_expressions(template) {
            return template.to_string();
        }

        let builtins = self.builtins();
        let max_passes = self.settings.effective_max_passes();
        let mut current = template.to_string();

        for pass in 1..=max_passes {
            let next = Self::substitute_once(&current, variables, &builtins);
            if next == current {
                trace!(pass, "template reached a fixed point");
                return next;
            }
            current = next;
        }

        debug!(max_passes, "substitution stopped at the pass limit");
        current
    }

    /// Runs one left-to-right substitution pass.
    fn substitute_once(input: &str, variables: &VariableMap, builtins: &BuiltinRegistry<'_>) -> String {
        let matches = parse_template(input);
        if matches.is_empty() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for found in &matches {
            result.push_str(&input[last_end..found.span.start]);

            match Self::resolve_expression(&found.expression, variables, builtins) {
                Some(value) => result.push_str(&value),
                None => result.push_str(&input[found.span.clone()]),
            }

            last_end = found.span.end;
        }

        result.push_str(&input[last_end..]);
        result
    }

    fn resolve_expression(
        expression: &Expression,
        variables: &VariableMap,
        builtins: &BuiltinRegistry<'_>,
    ) -> Option<String> {
        if let Some(value) = builtins.resolve(expression) {
            return Some(value);
        }

        // Modifiers only apply to builtins.
        if expression.has_modifiers() {
            trace!(name = %expression.name, "modifiers on a user variable, leaving as is");
            return None;
        }

        variables.get(&expression.name).cloned()
    }

    /// Lists the user variable names referenced by `template`, in order and
    /// with duplicates. Builtin names are excluded.
    #[must_use]
    pub fn used_variable_names(template: &str) -> Vec<String> {
        parse_template(template)
            .into_iter()
            .map(|m| m.expression.name)
            .filter(|name| !is_builtin(name))
            .collect()
    }

    /// Lists the used variable names that `variables` does not define.
    #[must_use]
    pub fn missing_variable_names(template: &str, variables: &VariableMap) -> Vec<String> {
        Self::used_variable_names(template)
            .into_iter()
            .filter(|name| !variables.contains_key(name))
            .collect()
    }
}

impl std::fmt::Debug for TemplateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateResolver")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

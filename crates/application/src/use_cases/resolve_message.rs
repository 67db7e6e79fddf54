//! Resolve Message Use Case
//!
//! Turns a publish button's templates into the concrete topic and payload
//! handed to the transport, and computes editor hints.

use std::sync::Arc;

use topiclab_domain::{MessageTemplate, ResolvedMessage, TemplateHints, VariableMap};

use crate::template_resolver::TemplateResolver;

/// Use case for resolving message and subscription templates.
///
/// Every call resolves against the current clock, so two calls may produce
/// different values for `{now}`, `{uuid}` and `{random}`.
#[derive(Debug, Clone)]
pub struct ResolveMessage {
    resolver: Arc<TemplateResolver>,
}

impl ResolveMessage {
    /// Creates the use case around a shared resolver.
    #[must_use]
    pub const fn new(resolver: Arc<TemplateResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves topic and payload, copying QoS and retain unchanged.
    #[must_use]
    pub fn resolve(&self, template: &MessageTemplate, variables: &VariableMap) -> ResolvedMessage {
        ResolvedMessage {
            topic: self.resolver.resolve(&template.topic, variables),
            payload: template
                .payload
                .as_deref()
                .map(|payload| self.resolver.resolve(payload, variables)),
            qos: template.qos,
            retain: template.retain,
        }
    }

    /// Resolves subscription filters. `+` and `#` wildcards are preserved.
    #[must_use]
    pub fn resolve_subscriptions(&self, filters: &[String], variables: &VariableMap) -> Vec<String> {
        filters
            .iter()
            .map(|filter| self.resolver.resolve(filter, variables))
            .collect()
    }

    /// Lists undefined variables across topic and payload, first-seen order,
    /// without duplicates.
    #[must_use]
    pub fn hints(template: &MessageTemplate, variables: &VariableMap) -> TemplateHints {
        let mut missing: Vec<String> = Vec::new();
        let templates = std::iter::once(template.topic.as_str()).chain(template.payload.as_deref());

        for text in templates {
            for name in TemplateResolver::missing_variable_names(text, variables) {
                if !missing.contains(&name) {
                    missing.push(name);
                }
            }
        }

        TemplateHints { missing }
    }
}

//! Publish button templates and their resolved form.

use serde::{Deserialize, Serialize};

/// MQTT quality of service level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::enum_variant_names)]
pub enum QoS {
    /// Fire and forget (default).
    #[default]
    AtMostOnce = 0,
    /// Acknowledged delivery.
    AtLeastOnce = 1,
    /// Assured single delivery.
    ExactlyOnce = 2,
}

impl QoS {
    /// Returns the numeric QoS level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Topic and payload templates attached to a publish button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// Topic template, e.g. `devices/{device_id}/cmd`.
    pub topic: String,

    /// Optional payload template.
    #[serde(default)]
    pub payload: Option<String>,

    /// Delivery guarantee.
    #[serde(default)]
    pub qos: QoS,

    /// Whether the broker should retain the message.
    #[serde(default)]
    pub retain: bool,
}

impl MessageTemplate {
    /// Creates a template with a topic only.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            payload: None,
            qos: QoS::default(),
            retain: false,
        }
    }

    /// Sets the payload template.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Sets the QoS level.
    #[must_use]
    pub const fn with_qos(mut self, qos: QoS) -> Self {
        self.qos = qos;
        self
    }

    /// Sets the retain flag.
    #[must_use]
    pub const fn with_retain(mut self, retain: bool) -> Self {
        self.retain = retain;
        self
    }
}

/// A message whose topic and payload are ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    /// Resolved topic.
    pub topic: String,
    /// Resolved payload, if the template had one.
    pub payload: Option<String>,
    /// Delivery guarantee, copied from the template.
    pub qos: QoS,
    /// Retain flag, copied from the template.
    pub retain: bool,
}

/// Editor hints for a message template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateHints {
    /// Variables referenced but not defined, first-seen order, no duplicates.
    pub missing: Vec<String>,
}

impl TemplateHints {
    /// Returns true when every referenced variable is defined.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_qos_serialization() {
        assert_eq!(serde_json::to_string(&QoS::AtMostOnce).unwrap(), "\"atmostonce\"");
        assert_eq!(
            serde_json::to_string(&QoS::ExactlyOnce).unwrap(),
            "\"exactlyonce\""
        );
        assert_eq!(
            serde_json::from_str::<QoS>("\"atleastonce\"").unwrap(),
            QoS::AtLeastOnce
        );
    }

    #[test]
    fn test_qos_level() {
        assert_eq!(QoS::AtMostOnce.level(), 0);
        assert_eq!(QoS::AtLeastOnce.level(), 1);
        assert_eq!(QoS::ExactlyOnce.level(), 2);
    }

    #[test]
    fn test_template_defaults_from_json() {
        let template: MessageTemplate =
            serde_json::from_str(r#"{"topic": "devices/{device_id}/+"}"#).unwrap();
        assert_eq!(template, MessageTemplate::new("devices/{device_id}/+"));
    }

    #[test]
    fn test_template_builder() {
        let template = MessageTemplate::new("t")
            .with_payload("{\"on\":true}")
            .with_qos(QoS::AtLeastOnce)
            .with_retain(true);
        assert_eq!(template.payload.as_deref(), Some("{\"on\":true}"));
        assert_eq!(template.qos, QoS::AtLeastOnce);
        assert!(template.retain);
    }

    #[test]
    fn test_hints_completeness() {
        assert!(TemplateHints::default().is_complete());
        let hints = TemplateHints {
            missing: vec!["mac".into()],
        };
        assert!(!hints.is_complete());
    }
}

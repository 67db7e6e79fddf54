//! Topic Lab - Template preview entry point
//!
//! Resolves one template against `name=value` pairs and prints the result:
//!
//! ```text
//! topiclab-resolve 'devices/{device_id}/{now:unix}' device_id=abc123
//! ```
//!
//! Settings are read from `TOPICLAB_SETTINGS` if set, otherwise from the
//! platform config directory.

use std::sync::Arc;

use topiclab_application::{SettingsStore, TemplateResolver};
use topiclab_domain::{ResolverSettings, VariableMap, validate_variable_name};
use topiclab_infrastructure::{SettingsRepository, SystemClock, ThreadRngSource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: topiclab-resolve <template> [name=value ...]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout carries only the result
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(template) = args.next() else {
        return Err(USAGE.into());
    };
    let variables = parse_assignments(args)?;

    let repository = std::env::var_os("TOPICLAB_SETTINGS")
        .map_or_else(SettingsRepository::new, SettingsRepository::with_path);
    let settings = match repository.load().await {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(%error, "could not load settings, using defaults");
            ResolverSettings::default()
        }
    };

    let resolver = TemplateResolver::new(Arc::new(SystemClock::new()), Arc::new(ThreadRngSource::new()))
        .with_settings(settings);

    for name in TemplateResolver::missing_variable_names(&template, &variables) {
        tracing::warn!(variable = %name, "template references an undefined variable");
    }

    println!("{}", resolver.resolve(&template, &variables));
    Ok(())
}

/// Collects `name=value` arguments into a variable map. Later duplicates win.
fn parse_assignments(
    args: impl IntoIterator<Item = String>,
) -> Result<VariableMap, Box<dyn std::error::Error>> {
    let mut variables = VariableMap::new();
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            return Err(format!("expected name=value, got {arg:?}\n{USAGE}").into());
        };
        validate_variable_name(name)?;
        variables.insert(name.to_string(), value.to_string());
    }
    Ok(variables)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_assignments() {
        let vars = parse_assignments(args(&["device_id=abc", "payload=a=b"])).unwrap();
        assert_eq!(vars.get("device_id").map(String::as_str), Some("abc"));
        assert_eq!(vars.get("payload").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_later_assignment_wins() {
        let vars = parse_assignments(args(&["a=1", "a=2"])).unwrap();
        assert_eq!(vars.get("a").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_rejects_missing_equals() {
        assert!(parse_assignments(args(&["device_id"])).is_err());
    }

    #[test]
    fn test_rejects_invalid_name() {
        assert!(parse_assignments(args(&["device-id=abc"])).is_err());
    }
}

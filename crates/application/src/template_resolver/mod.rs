//! Template resolution module
//!
//! Provides parsing and resolution of `{name}` and `{builtin:modifier:...}`
//! syntax in topic, payload and subscription templates.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use chrono::{DateTime, Utc};
//! use topiclab_application::ports::{Clock, RandomSource};
//! use topiclab_application::template_resolver::TemplateResolver;
//! use topiclab_domain::VariableMap;
//!
//! struct Frozen;
//! impl Clock for Frozen {
//!     fn now(&self) -> DateTime<Utc> {
//!         "2024-06-15T10:30:45.123Z".parse().unwrap()
//!     }
//! }
//!
//! struct Lowest;
//! impl RandomSource for Lowest {
//!     fn fill_bytes(&self, dest: &mut [u8]) { dest.fill(0) }
//!     fn range_inclusive(&self, min: u64, _max: u64) -> u64 { min }
//! }
//!
//! let resolver = TemplateResolver::new(Arc::new(Frozen), Arc::new(Lowest));
//! let mut vars = VariableMap::new();
//! vars.insert("site".to_string(), "plant-7".to_string());
//!
//! let topic = resolver.resolve("{site}/{now:utc:-1h:datetime}/{random:3-9}", &vars);
//! assert_eq!(topic, "plant-7/2024-06-15 09:30:45/3");
//! ```

pub mod builtins;
pub mod engine;
pub mod parser;

pub use builtins::{Builtin, BuiltinInfo, BuiltinRegistry, is_builtin};
pub use engine::TemplateResolver;
pub use parser::{ExpressionMatch, extract_names, has_expressions, parse_expression, parse_template};

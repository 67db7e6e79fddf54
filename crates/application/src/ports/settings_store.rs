//! Settings store port

use async_trait::async_trait;
use topiclab_domain::ResolverSettings;

use crate::error::ApplicationResult;

/// Port for loading and saving resolver settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Loads settings, falling back to defaults when none are stored.
    async fn load(&self) -> ApplicationResult<ResolverSettings>;

    /// Persists settings.
    async fn save(&self, settings: &ResolverSettings) -> ApplicationResult<()>;
}

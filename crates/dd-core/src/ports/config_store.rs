use async_trait::async_trait;

use crate::config::AppConfig;

/// Port for loading and persisting the application configuration.
#[async_trait]
pub trait ConfigStorePort: Send + Sync {
    /// Load the configuration, falling back to defaults when no file exists.
    async fn load(&self) -> anyhow::Result<AppConfig>;

    async fn save(&self, config: &AppConfig) -> anyhow::Result<()>;
}

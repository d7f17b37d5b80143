//! TOML file configuration store.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use dd_core::config::AppConfig;
use dd_core::ports::ConfigStorePort;

pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create config dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write through a temp file and rename, so the target is always
    /// either the previous contents or the fully written new contents.
    async fn write_atomic(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content)
            .await
            .with_context(|| format!("write config temp file failed: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replace config file failed: {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl ConfigStorePort for TomlConfigStore {
    async fn load(&self) -> Result<AppConfig> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(AppConfig::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("read config file failed: {}", self.path.display())
                })
            }
        };
        toml::from_str(&raw)
            .with_context(|| format!("parse config file failed: {}", self.path.display()))
    }

    async fn save(&self, config: &AppConfig) -> Result<()> {
        let raw = toml::to_string_pretty(config).context("serialize config failed")?;
        self.write_atomic(&raw).await
    }
}

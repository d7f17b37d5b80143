//! Application directory resolution.

use std::path::{Path, PathBuf};

use anyhow::Context;

const APP_DIR_NAME: &str = "devicedeck";

/// Directory materialized resources are copied into.
///
/// An override from configuration wins; otherwise the platform cache
/// directory is used.
pub fn cache_dir(override_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let base = dirs::cache_dir().context("no cache directory on this platform")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Default location of the configuration file.
pub fn config_file() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("no config directory on this platform")?;
    Ok(base.join(APP_DIR_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_platform_default() {
        let dir = cache_dir(Some(Path::new("/tmp/elsewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }
}

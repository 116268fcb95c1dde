use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::GiftfundConfig;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<GiftfundConfig> {
    if !path.exists() {
        // If config doesn't exist, create a default one
        let config = GiftfundConfig::default();
        save_config(path, &config)?;
        return Ok(config);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: GiftfundConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(path: &Path, config: &GiftfundConfig) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config)
        .context("Failed to serialize config to TOML")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Resolve the catalog location from settings; relative paths live beside
/// the config file.
pub fn resolve_catalog_path(config_path: &Path, config: &GiftfundConfig) -> PathBuf {
    let catalog = &config.settings.catalog_path;
    if catalog.is_absolute() {
        catalog.clone()
    } else {
        config_path
            .parent()
            .map(|dir| dir.join(catalog))
            .unwrap_or_else(|| catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_creates_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("giftfund.toml");

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.settings.viewer_name, "me");
        assert!(config_path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let mut config = GiftfundConfig::default();
        config.settings.auto_save = false;
        config.settings.viewer_name = "Juno".to_string();

        save_config(&config_path, &config).unwrap();
        let loaded = load_config(&config_path).unwrap();

        assert_eq!(loaded.settings.auto_save, false);
        assert_eq!(loaded.settings.viewer_name, "Juno");
    }

    #[test]
    fn test_relative_catalog_path_resolves_beside_config() {
        let config = GiftfundConfig::default();
        let resolved = resolve_catalog_path(Path::new("/etc/giftfund/config.toml"), &config);
        assert_eq!(resolved, Path::new("/etc/giftfund/catalog.json"));
    }
}

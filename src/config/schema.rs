use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftfundConfig {
    pub version: String,
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub viewer_name: String,
    /// Where the catalog JSON lives; relative paths resolve against the
    /// config file's directory.
    pub catalog_path: PathBuf,
    pub auto_save: bool,
}

impl Default for GiftfundConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewer_name: "me".to_string(),
            catalog_path: PathBuf::from("catalog.json"),
            auto_save: true,
        }
    }
}

impl GiftfundConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

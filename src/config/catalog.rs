use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{Account, Address, Anniversary, Brand, Funding, Product, Wishlist};

/// Everything the pages render: products, brands, friends' anniversaries,
/// fundings, and the viewer's accounts and addresses. Pages read from this
/// snapshot; nothing here mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub anniversaries: Vec<Anniversary>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub my_fundings: Vec<Funding>,
    #[serde(default)]
    pub friend_fundings: Vec<Funding>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub wishlists: Vec<Wishlist>,
}

/// Load the catalog JSON, creating an empty one when the file is absent.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        let catalog = Catalog::default();
        save_catalog(path, &catalog)?;
        return Ok(catalog);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog: Catalog = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    Ok(catalog)
}

pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create catalog directory: {}", parent.display()))?;
    }

    let content =
        serde_json::to_string_pretty(catalog).context("Failed to serialize catalog to JSON")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use uuid::Uuid;

    #[test]
    fn test_load_nonexistent_creates_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");

        let catalog = load_catalog(&path).unwrap();
        assert!(catalog.products.is_empty());
        assert!(catalog.anniversaries.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");

        let brand = Brand::new("Acme".to_string(), "Everything, anvils first".to_string());
        let product = Product::new(
            "Anvil".to_string(),
            brand.id,
            30000,
            "Classic drop-forged anvil".to_string(),
        );
        let anniversary = Anniversary::new(
            "Birthday".to_string(),
            Uuid::new_v4(),
            "Mina".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
        );

        let catalog = Catalog {
            brands: vec![brand],
            products: vec![product.clone()],
            anniversaries: vec![anniversary],
            ..Catalog::default()
        };

        save_catalog(&path, &catalog).unwrap();
        let loaded = load_catalog(&path).unwrap();

        assert_eq!(loaded.products.len(), 1);
        assert_eq!(loaded.products[0].id, product.id);
        assert_eq!(loaded.brands.len(), 1);
        assert_eq!(loaded.anniversaries[0].friend_name, "Mina");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, r#"{"products": []}"#).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert!(catalog.accounts.is_empty());
        assert!(catalog.wishlists.is_empty());
    }
}

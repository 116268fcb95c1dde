pub mod catalog;
pub mod loader;
pub mod schema;

pub use catalog::{load_catalog, save_catalog, Catalog};
pub use loader::{load_config, resolve_catalog_path, save_config};
pub use schema::{GiftfundConfig, Settings};

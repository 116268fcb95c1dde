use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::{
    load_catalog, load_config, resolve_catalog_path, save_config, Catalog, GiftfundConfig, Settings,
};
use crate::models::{Brand, CardRecord, Funding, Product, Wishlist};
use crate::routing::{RouteMatch, RouteParams};
use crate::ui::Page;

use super::selection::SelectionState;

#[derive(Debug, Clone)]
pub struct AppState {
    // Core data
    pub catalog: Catalog,
    pub settings: Settings,

    // UI state
    pub current: RouteMatch<Page>,
    pub history: Vec<RouteMatch<Page>>,
    pub selection_state: SelectionState,
    /// `Some` while the location prompt is open; holds the typed path.
    pub location_input: Option<String>,

    pub notifications: VecDeque<Notification>,

    // Configuration
    pub config_path: PathBuf,
    pub catalog_path: PathBuf,

    // Application control
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl AppState {
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let config = load_config(&config_path)?;
        let catalog_path = resolve_catalog_path(&config_path, &config);
        let catalog = load_catalog(&catalog_path)?;

        Ok(Self {
            catalog,
            settings: config.settings,
            current: RouteMatch {
                page: Page::default(),
                params: RouteParams::default(),
                path: "/".to_string(),
            },
            history: Vec::new(),
            selection_state: SelectionState::default(),
            location_input: None,
            notifications: VecDeque::new(),
            config_path,
            catalog_path,
            should_quit: false,
        })
    }

    pub fn save(&self) -> Result<()> {
        let config = GiftfundConfig {
            version: env!("CARGO_PKG_VERSION").to_string(),
            settings: self.settings.clone(),
        };

        save_config(&self.config_path, &config)
    }

    // Navigation methods
    pub fn navigate_to(&mut self, route: RouteMatch<Page>) {
        self.history.push(self.current.clone());
        self.current = route;
        self.selection_state.reset();
    }

    pub fn navigate_back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            self.selection_state.reset();
        }
    }

    pub fn current_page(&self) -> Page {
        self.current.page
    }

    // Notification methods
    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push_back(notification);

        // Keep only the last 50 notifications
        while self.notifications.len() > 50 {
            self.notifications.pop_front();
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    // Catalog lookups
    pub fn get_product(&self, id: Uuid) -> Option<&Product> {
        self.catalog.products.iter().find(|p| p.id == id)
    }

    pub fn get_brand(&self, id: Uuid) -> Option<&Brand> {
        self.catalog.brands.iter().find(|b| b.id == id)
    }

    pub fn brand_products(&self, brand_id: Uuid) -> Vec<&Product> {
        self.catalog
            .products
            .iter()
            .filter(|p| p.brand_id == brand_id)
            .collect()
    }

    pub fn get_wishlist(&self, user_id: Uuid) -> Option<&Wishlist> {
        self.catalog.wishlists.iter().find(|w| w.user_id == user_id)
    }

    /// Friend funding ending soonest; feeds the always-visible overlay.
    pub fn urgent_friend_funding(&self) -> Option<&Funding> {
        self.catalog
            .friend_fundings
            .iter()
            .min_by_key(|f| f.ends_on)
    }

    // Card projections for the card-list pages
    pub fn anniversary_cards(&self) -> Vec<CardRecord> {
        self.catalog
            .anniversaries
            .iter()
            .map(|a| a.to_card())
            .collect()
    }

    pub fn my_funding_cards(&self) -> Vec<CardRecord> {
        self.catalog.my_fundings.iter().map(|f| f.to_card()).collect()
    }
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            timestamp: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            timestamp: Utc::now(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state() -> AppState {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::new(temp_dir.path().join("config.toml")).unwrap();
        // TempDir drops here; the config was only needed during construction.
        state
    }

    fn route(page: Page, path: &str) -> RouteMatch<Page> {
        RouteMatch {
            page,
            params: RouteParams::default(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_starts_on_anniversary_listing() {
        let state = state();
        assert_eq!(state.current_page(), Page::AnniversaryList);
        assert_eq!(state.current.path, "/");
    }

    #[test]
    fn test_navigate_then_back_restores_previous_route() {
        let mut state = state();
        state.navigate_to(route(Page::ProductList, "/product"));
        state.navigate_to(route(Page::MyFunding, "/my-funding"));
        assert_eq!(state.current.path, "/my-funding");

        state.navigate_back();
        assert_eq!(state.current_page(), Page::ProductList);
        assert_eq!(state.current.path, "/product");

        state.navigate_back();
        assert_eq!(state.current.path, "/");

        // Back on an empty history is a no-op.
        state.navigate_back();
        assert_eq!(state.current.path, "/");
    }

    #[test]
    fn test_navigation_resets_selection() {
        let mut state = state();
        state.selection_state.products_list_index = 3;
        state.navigate_to(route(Page::ProductList, "/product"));
        assert_eq!(state.selection_state.products_list_index, 0);
    }

    #[test]
    fn test_notifications_cap_at_fifty() {
        let mut state = state();
        for i in 0..60 {
            state.push_notification(Notification::info(format!("n{i}")));
        }
        assert_eq!(state.notifications.len(), 50);
        assert_eq!(state.notifications.front().unwrap().message, "n10");
        assert_eq!(
            state.notifications.front().unwrap().level,
            NotificationLevel::Info
        );
    }
}

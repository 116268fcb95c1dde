use anyhow::Result;
use crossterm::event;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::events::{handle_event, Action};
use crate::routing::RouteTable;
use crate::state::{AppState, Notification};
use crate::ui::{render, route_table, Page};

pub struct App {
    pub state: AppState,
    pub router: RouteTable<Page>,
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state: AppState::new(config_path)?,
            router: route_table()?,
            action_tx,
            action_rx,
        })
    }

    /// Main event loop following The Elm Architecture pattern
    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            // Render (TEA View)
            terminal.draw(|frame| render(frame, &self.state))?;

            // Handle events - multiplex between user input and async results
            tokio::select! {
                // User input events
                event_result = tokio::task::spawn_blocking(|| event::read()) => {
                    if let Ok(Ok(event)) = event_result {
                        let action = handle_event(event, &self.state);
                        if !matches!(action, Action::None) {
                            self.update(action)?;
                        }
                    }
                }

                // Async operation results
                Some(action) = self.action_rx.recv() => {
                    self.update(action)?;
                }
            }

            // Check if we should quit
            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Update function (TEA Update) - processes Actions and updates state
    pub fn update(&mut self, action: Action) -> Result<()> {
        match action {
            // Navigation: resolve through the route table, mount the result.
            // Resolution is total, so undefined paths mount the not-found
            // page instead of leaving the content region blank.
            Action::Navigate(path) => {
                let route = self.router.resolve(&path);
                if route.page == Page::NotFound {
                    self.state
                        .push_notification(Notification::warning(format!(
                            "No page at {}",
                            route.path
                        )));
                }
                self.state.navigate_to(route);
            }

            Action::NavigateBack => {
                self.state.navigate_back();
            }

            // Location prompt
            Action::OpenLocationPrompt => {
                self.state.location_input = Some("/".to_string());
            }

            Action::LocationInput(c) => {
                if let Some(input) = self.state.location_input.as_mut() {
                    input.push(c);
                }
            }

            Action::LocationBackspace => {
                if let Some(input) = self.state.location_input.as_mut() {
                    input.pop();
                }
            }

            Action::LocationCancel => {
                self.state.location_input = None;
            }

            Action::LocationSubmit => {
                if let Some(path) = self.state.location_input.take() {
                    if !path.is_empty() {
                        self.update(Action::Navigate(path))?;
                    }
                }
            }

            // Selection navigation
            Action::SelectNext => match self.state.current_page() {
                Page::AnniversaryList => {
                    let len = self.state.catalog.anniversaries.len();
                    if len > 0 {
                        self.state.selection_state.anniversaries_list_index =
                            (self.state.selection_state.anniversaries_list_index + 1) % len;
                    }
                }
                Page::ProductList => {
                    let len = self.state.catalog.products.len();
                    if len > 0 {
                        self.state.selection_state.products_list_index =
                            (self.state.selection_state.products_list_index + 1) % len;
                    }
                }
                _ => {}
            },

            Action::SelectPrevious => match self.state.current_page() {
                Page::AnniversaryList => {
                    let len = self.state.catalog.anniversaries.len();
                    if len > 0 {
                        self.state.selection_state.anniversaries_list_index =
                            (self.state.selection_state.anniversaries_list_index + len - 1) % len;
                    }
                }
                Page::ProductList => {
                    let len = self.state.catalog.products.len();
                    if len > 0 {
                        self.state.selection_state.products_list_index =
                            (self.state.selection_state.products_list_index + len - 1) % len;
                    }
                }
                _ => {}
            },

            // Enter on a list row jumps to the matching parameterized route
            Action::OpenSelected => match self.state.current_page() {
                Page::AnniversaryList => {
                    if let Some(friend_id) = self.selected_friend_id() {
                        self.update(Action::Navigate(format!("/wishlist/{friend_id}")))?;
                    }
                }
                Page::ProductList => {
                    if let Some(product_id) = self.selected_product_id() {
                        self.update(Action::Navigate(format!("/product/{product_id}")))?;
                    }
                }
                _ => {}
            },

            Action::OpenSelectedBrand => {
                if self.state.current_page() == Page::ProductList {
                    if let Some(brand_id) = self.selected_brand_id() {
                        self.update(Action::Navigate(format!("/brand/{brand_id}")))?;
                    }
                }
            }

            // Catalog reload
            Action::ReloadCatalog => {
                self.state
                    .push_notification(Notification::info("Reloading catalog"));
                self.spawn_reload_catalog();
            }

            Action::CatalogLoaded(Ok(catalog)) => {
                self.state.catalog = catalog;
                self.state.selection_state.reset();
                self.update(Action::ShowNotification(Notification::success(
                    "Catalog reloaded",
                )))?;
            }

            Action::CatalogLoaded(Err(error)) => {
                self.update(Action::ShowNotification(Notification::error(format!(
                    "Catalog reload failed: {}",
                    error
                ))))?;
            }

            // Notifications
            Action::ShowNotification(notification) => {
                self.state.push_notification(notification);
            }

            Action::DismissNotification => {
                self.state.dismiss_notification();
            }

            // System
            Action::Quit => {
                if self.state.settings.auto_save {
                    self.state.save()?;
                }
                self.state.should_quit = true;
            }

            Action::None => {}
        }

        Ok(())
    }

    fn selected_friend_id(&self) -> Option<Uuid> {
        self.state
            .catalog
            .anniversaries
            .get(self.state.selection_state.anniversaries_list_index)
            .map(|a| a.friend_id)
    }

    fn selected_product_id(&self) -> Option<Uuid> {
        self.state
            .catalog
            .products
            .get(self.state.selection_state.products_list_index)
            .map(|p| p.id)
    }

    fn selected_brand_id(&self) -> Option<Uuid> {
        self.state
            .catalog
            .products
            .get(self.state.selection_state.products_list_index)
            .map(|p| p.brand_id)
    }

    // Async operation spawner
    fn spawn_reload_catalog(&self) {
        let path = self.state.catalog_path.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = async {
                let content = tokio::fs::read_to_string(&path).await?;
                let catalog = serde_json::from_str(&content)?;
                anyhow::Ok(catalog)
            }
            .await;

            let action = Action::CatalogLoaded(result.map_err(|e| e.to_string()));
            let _ = tx.send(action);
        });
    }
}

use crate::config::Catalog;
use crate::state::Notification;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(String),
    NavigateBack,

    // Location prompt (type a path, submit through the router)
    OpenLocationPrompt,
    LocationInput(char),
    LocationBackspace,
    LocationSubmit,
    LocationCancel,

    // Selection/UI
    SelectNext,
    SelectPrevious,
    OpenSelected,
    OpenSelectedBrand,

    // Catalog reload (async result arrives over the action channel)
    ReloadCatalog,
    CatalogLoaded(Result<Catalog, String>),

    // Notifications
    ShowNotification(Notification),
    DismissNotification,

    // System
    Quit,

    // No-op
    None,
}

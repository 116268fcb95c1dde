pub mod app_state;
pub mod selection;

pub use app_state::{AppState, Notification, NotificationLevel};
pub use selection::SelectionState;

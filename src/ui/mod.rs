pub mod components;
pub mod page;
pub mod render;
pub mod screens;
pub mod theme;

pub use page::{route_table, Page};
pub use render::render;
pub use theme::Theme;

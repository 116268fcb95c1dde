mod error;
mod pattern;
mod table;

pub use error::RouterError;
pub use pattern::{RouteParams, RoutePattern};
pub use table::{RouteMatch, RouteTable, RouteTableBuilder};

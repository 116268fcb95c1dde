pub mod brand;
pub mod detail;
pub mod list;
pub mod wishlist;

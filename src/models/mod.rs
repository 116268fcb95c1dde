pub mod account;
pub mod address;
pub mod anniversary;
pub mod card;
pub mod funding;
pub mod product;
pub mod wishlist;

pub use account::Account;
pub use address::Address;
pub use anniversary::Anniversary;
pub use card::CardRecord;
pub use funding::Funding;
pub use product::{Brand, Product};
pub use wishlist::Wishlist;

pub mod accounts;
pub mod addresses;
pub mod anniversaries;
pub mod friend_funding;
pub mod my_funding;
pub mod not_found;
pub mod products;

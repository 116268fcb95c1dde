use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Products a user wishes for, keyed by the user's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wishlist {
    pub user_id: Uuid,
    pub owner_name: String,
    pub product_ids: Vec<Uuid>,
}

impl Wishlist {
    pub fn new(user_id: Uuid, owner_name: String) -> Self {
        Self {
            user_id,
            owner_name,
            product_ids: Vec::new(),
        }
    }
}

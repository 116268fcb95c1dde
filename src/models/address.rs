use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub alias: String,
    pub recipient: String,
    pub address: String,
    pub phone: String,
}

impl Address {
    pub fn new(alias: String, recipient: String, address: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            alias,
            recipient,
            address,
            phone,
        }
    }
}

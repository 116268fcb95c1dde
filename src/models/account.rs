use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A payout account a finished funding transfers into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub bank: String,
    pub number: String,
    pub holder: String,
    pub primary: bool,
}

impl Account {
    pub fn new(bank: String, number: String, holder: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank,
            number,
            holder,
            primary: false,
        }
    }
}

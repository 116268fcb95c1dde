use serde::{Deserialize, Serialize};

/// The four display fields a card shows. Values are rendered verbatim;
/// nothing here is derived, formatted, or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub title: String,
    pub name: String,
    pub date: String,
    pub progress: u8,
}

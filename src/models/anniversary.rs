use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CardRecord;

/// An upcoming friend anniversary with an attached gift funding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anniversary {
    pub id: Uuid,
    pub title: String,
    pub friend_id: Uuid,
    pub friend_name: String,
    pub date: NaiveDate,
    pub progress: u8,
}

impl Anniversary {
    pub fn new(title: String, friend_id: Uuid, friend_name: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            friend_id,
            friend_name,
            date,
            progress: 0,
        }
    }

    pub fn to_card(&self) -> CardRecord {
        CardRecord {
            title: self.title.clone(),
            name: self.friend_name.clone(),
            date: self.date.format("%Y-%m-%d").to_string(),
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_projection_carries_all_four_fields() {
        let mut anniversary = Anniversary::new(
            "Birthday".to_string(),
            Uuid::new_v4(),
            "Mina".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        anniversary.progress = 50;

        let card = anniversary.to_card();
        assert_eq!(card.title, "Birthday");
        assert_eq!(card.name, "Mina");
        assert_eq!(card.date, "2024-01-01");
        assert_eq!(card.progress, 50);
    }
}

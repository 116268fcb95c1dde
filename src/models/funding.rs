use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CardRecord;

/// A gift funding collecting contributions toward a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Funding {
    pub id: Uuid,
    pub title: String,
    pub owner_name: String,
    pub product_id: Uuid,
    pub goal: u32,
    pub collected: u32,
    pub ends_on: NaiveDate,
}

impl Funding {
    pub fn new(
        title: String,
        owner_name: String,
        product_id: Uuid,
        goal: u32,
        ends_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            owner_name,
            product_id,
            goal,
            collected: 0,
            ends_on,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        if self.goal == 0 {
            return 0;
        }
        let percent = (u64::from(self.collected) * 100) / u64::from(self.goal);
        percent.min(100) as u8
    }

    pub fn to_card(&self) -> CardRecord {
        CardRecord {
            title: self.title.clone(),
            name: self.owner_name.clone(),
            date: self.ends_on.format("%Y-%m-%d").to_string(),
            progress: self.progress_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funding(goal: u32, collected: u32) -> Funding {
        let mut f = Funding::new(
            "Keyboard fund".to_string(),
            "Juno".to_string(),
            Uuid::new_v4(),
            goal,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        f.collected = collected;
        f
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(funding(200, 0).progress_percent(), 0);
        assert_eq!(funding(200, 100).progress_percent(), 50);
        assert_eq!(funding(200, 200).progress_percent(), 100);
        // Over-collection caps at 100, zero goal never divides.
        assert_eq!(funding(200, 500).progress_percent(), 100);
        assert_eq!(funding(0, 100).progress_percent(), 0);
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub brand_id: Uuid,
    pub price: u32,
    pub description: String,
    pub wish_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub tagline: String,
}

impl Product {
    pub fn new(name: String, brand_id: Uuid, price: u32, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            brand_id,
            price,
            description,
            wish_count: 0,
        }
    }

    pub fn display_price(&self) -> String {
        format!("{}won", group_digits(self.price))
    }
}

impl Brand {
    pub fn new(name: String, tagline: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tagline,
        }
    }
}

/// Thousands separators for price display, e.g. 1234567 -> "1,234,567".
fn group_digits(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

//! Row types mapping database records to domain records.

use chrono::{DateTime, Utc};
use market_types::{Product, User};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct DbUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl DbUser {
    pub(crate) fn into_domain(self) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct DbProduct {
    pub id: i64,
    pub store_id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl DbProduct {
    pub(crate) fn into_domain(self) -> Product {
        Product {
            id: self.id,
            store_id: self.store_id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            stock: self.stock,
            created_at: self.created_at,
        }
    }
}

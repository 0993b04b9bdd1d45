//! Resource records and their create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Attributes for creating or updating a user. The record id is never part
/// of the payload; it is assigned by storage or taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// A product listed by a store.
///
/// `price` is a decimal string; the services never do arithmetic on it, so
/// it crosses every boundary untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
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

/// Attributes for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub store_id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub stock: i32,
}

//! Repository port traits.
//!
//! These are the primary ports in the hexagonal architecture. Storage
//! adapters implement them and are responsible for classifying every raw
//! storage failure into a [`DomainError`] before it crosses this boundary;
//! nothing above the port ever sees a driver error.

use crate::domain::{NewProduct, NewUser, Product, User};
use crate::error::DomainError;

/// Storage port for user records.
///
/// `find_by_id` returns `Ok(None)` for an absent row; synthesizing the
/// `NotFound` domain error from that is the orchestrator's job.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Inserts a new user and returns the stored record.
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// Fetches a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Lists all users, newest first.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Overwrites the attributes of an existing user.
    async fn update(&self, id: i64, changes: NewUser) -> Result<(), DomainError>;

    /// Deletes a user by id.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Storage port for product records.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Inserts a new product and returns the stored record.
    async fn insert(&self, product: NewProduct) -> Result<Product, DomainError>;

    /// Fetches a product by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;

    /// Lists all products, newest first.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Overwrites the attributes of an existing product.
    async fn update(&self, id: i64, changes: NewProduct) -> Result<(), DomainError>;

    /// Deletes a product by id.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

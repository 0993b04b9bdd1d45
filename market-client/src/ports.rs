//! Client-side ports over the two backend services.
//!
//! The gateway handlers depend on these traits rather than on concrete tonic
//! clients, which keeps them testable with in-memory doubles. Errors stay as
//! [`tonic::Status`] so the HTTP layer can translate codes in one place.

use async_trait::async_trait;
use tonic::Status;

use market_types::{NewProduct, NewUser, Product, User};

#[async_trait]
pub trait UserApi: Send + Sync + 'static {
    async fn create(&self, user: NewUser) -> Result<User, Status>;
    async fn get(&self, id: i64) -> Result<User, Status>;
    async fn list(&self) -> Result<Vec<User>, Status>;
    async fn update(&self, id: i64, changes: NewUser) -> Result<(), Status>;
    async fn delete(&self, id: i64) -> Result<(), Status>;
}

#[async_trait]
pub trait ProductApi: Send + Sync + 'static {
    async fn create(&self, product: NewProduct) -> Result<Product, Status>;
    async fn get(&self, id: i64) -> Result<Product, Status>;
    async fn list(&self) -> Result<Vec<Product>, Status>;
    async fn update(&self, id: i64, changes: NewProduct) -> Result<(), Status>;
    async fn delete(&self, id: i64) -> Result<(), Status>;
}

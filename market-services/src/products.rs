//! Product CRUD orchestration.
//!
//! Mirrors the user orchestrator: same deadline discipline, same
//! existence-check-before-mutate contract.

use std::future::Future;
use std::time::Duration;

use market_types::{DomainError, NewProduct, Product, ProductRepository};

/// Orchestrates product operations through the repository port.
pub struct ProductService<R: ProductRepository> {
    repo: R,
    op_timeout: Duration,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service; `op_timeout` bounds each storage call.
    pub fn new(repo: R, op_timeout: Duration) -> Self {
        Self { repo, op_timeout }
    }

    /// Creates a new product.
    pub async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        self.bounded(self.repo.insert(product)).await
    }

    /// Gets a product by id; an absent row is a `NotFound` domain error.
    pub async fn get(&self, id: i64) -> Result<Product, DomainError> {
        self.bounded(self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| DomainError::not_found("product not found"))
    }

    /// Lists all products.
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.bounded(self.repo.list()).await
    }

    /// Updates a product by id after a successful existence check. A
    /// failure of the mutation itself (for example a uniqueness collision
    /// introduced by the new values) is classified independently.
    pub async fn update(&self, id: i64, changes: NewProduct) -> Result<(), DomainError> {
        self.get(id).await?;
        self.bounded(self.repo.update(id, changes)).await
    }

    /// Deletes a product by id after a successful existence check.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.get(id).await?;
        self.bounded(self.repo.delete(id)).await
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::unknown(format!(
                "storage call did not complete within {:?}",
                self.op_timeout
            ))),
        }
    }
}

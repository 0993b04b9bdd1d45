//! User CRUD orchestration.
//!
//! Contains NO infrastructure logic - pure orchestration over the
//! repository port. Every storage call runs under a fixed per-call
//! deadline; mutations are preceded by an existence check so "not found"
//! is always a distinguishable outcome.

use std::future::Future;
use std::time::Duration;

use market_types::{DomainError, NewUser, User, UserRepository};

/// Orchestrates user operations through the repository port.
///
/// Generic over `R: UserRepository` - the adapter is injected at
/// compile time, which keeps the orchestrator testable with an
/// in-memory repository.
pub struct UserService<R: UserRepository> {
    repo: R,
    op_timeout: Duration,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service; `op_timeout` bounds each storage call.
    pub fn new(repo: R, op_timeout: Duration) -> Self {
        Self { repo, op_timeout }
    }

    /// Creates a new user.
    pub async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.bounded(self.repo.insert(user)).await
    }

    /// Gets a user by id; an absent row is a `NotFound` domain error.
    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        self.bounded(self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| DomainError::not_found("user not found"))
    }

    /// Lists all users. An empty store is an empty collection, never an
    /// error.
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.bounded(self.repo.list()).await
    }

    /// Updates a user by id.
    ///
    /// The existence check runs first; a plain UPDATE that matches zero
    /// rows would be indistinguishable from success, silently masking a
    /// not-found condition. Only after the check succeeds is the mutation
    /// issued, and its failure is classified independently.
    pub async fn update(&self, id: i64, changes: NewUser) -> Result<(), DomainError> {
        self.get(id).await?;
        self.bounded(self.repo.update(id, changes)).await
    }

    /// Deletes a user by id, with the same existence-check discipline as
    /// [`Self::update`].
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.get(id).await?;
        self.bounded(self.repo.delete(id)).await
    }

    /// Runs one storage call under the per-call deadline. Deadline expiry
    /// is not a data-integrity condition, so it surfaces as `Unknown`.
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

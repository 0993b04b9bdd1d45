//! PostgreSQL adapter for the user repository port.

use async_trait::async_trait;
use sqlx::PgPool;

use market_types::{DomainError, NewUser, User, UserRepository};

use crate::classify::classify;
use crate::types::DbUser;

/// User storage backed by a shared connection pool.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let row: DbUser = sqlx::query_as(
            r#"INSERT INTO users (first_name, last_name, username)
               VALUES ($1, $2, $3)
               RETURNING id, first_name, last_name, username, created_at"#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(row.into_domain())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row: Option<DbUser> = sqlx::query_as(
            r#"SELECT id, first_name, last_name, username, created_at
               FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;

        Ok(row.map(DbUser::into_domain))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<DbUser> = sqlx::query_as(
            r#"SELECT id, first_name, last_name, username, created_at
               FROM users ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(DbUser::into_domain).collect())
    }

    // No affected-row check here: the orchestrator runs an existence check
    // before every mutation, so a zero-row update means the row vanished
    // between the check and the statement.
    async fn update(&self, id: i64, changes: NewUser) -> Result<(), DomainError> {
        sqlx::query(
            r#"UPDATE users SET first_name = $1, last_name = $2, username = $3
               WHERE id = $4"#,
        )
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.username)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(())
    }
}

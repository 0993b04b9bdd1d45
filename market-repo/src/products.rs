//! PostgreSQL adapter for the product repository port.

use async_trait::async_trait;
use sqlx::PgPool;

use market_types::{DomainError, NewProduct, Product, ProductRepository};

use crate::classify::classify;
use crate::types::DbProduct;

/// Product storage backed by a shared connection pool.
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product, DomainError> {
        let row: DbProduct = sqlx::query_as(
            r#"INSERT INTO products (store_id, category_id, name, description, price, image_url, stock)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, store_id, category_id, name, description, price, image_url, stock, created_at"#,
        )
        .bind(product.store_id)
        .bind(product.category_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.image_url)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(row.into_domain())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let row: Option<DbProduct> = sqlx::query_as(
            r#"SELECT id, store_id, category_id, name, description, price, image_url, stock, created_at
               FROM products WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify)?;

        Ok(row.map(DbProduct::into_domain))
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<DbProduct> = sqlx::query_as(
            r#"SELECT id, store_id, category_id, name, description, price, image_url, stock, created_at
               FROM products ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(DbProduct::into_domain).collect())
    }

    async fn update(&self, id: i64, changes: NewProduct) -> Result<(), DomainError> {
        sqlx::query(
            r#"UPDATE products
               SET store_id = $1, category_id = $2, name = $3, description = $4,
                   price = $5, image_url = $6, stock = $7
               WHERE id = $8"#,
        )
        .bind(changes.store_id)
        .bind(changes.category_id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(&changes.price)
        .bind(&changes.image_url)
        .bind(changes.stock)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(classify)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query(r#"DELETE FROM products WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(())
    }
}

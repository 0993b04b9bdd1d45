//! HTTP request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use validator::Validate;

use market_client::{ProductApi, UserApi};
use market_types::{NewProduct, NewUser};

use crate::error::ApiError;

/// Backend handles shared across handlers.
pub struct GatewayState<U: UserApi, P: ProductApi> {
    pub users: U,
    pub products: P,
}

/// Create/update payload for users.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub first_name: String,
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub last_name: String,
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub username: String,
}

impl From<UserPayload> for NewUser {
    fn from(payload: UserPayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            username: payload.username,
        }
    }
}

/// Create/update payload for products.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub store_id: i64,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub category_id: i64,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub price: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub image_url: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub stock: i32,
}

impl From<ProductPayload> for NewProduct {
    fn from(payload: ProductPayload) -> Self {
        Self {
            store_id: payload.store_id,
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
            stock: payload.stock,
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest("invalid id".into()))?;
    if id <= 0 {
        return Err(ApiError::BadRequest("invalid id".into()));
    }
    Ok(id)
}

fn validated<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(payload) = payload.map_err(|rej| ApiError::BadRequest(rej.body_text()))?;
    payload.validate().map_err(ApiError::from_validation)?;
    Ok(payload)
}

// users

#[tracing::instrument(skip_all)]
pub async fn create_user<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = validated(payload)?;
    let user = state.users.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[tracing::instrument(skip(state))]
pub async fn get_user<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.get(parse_id(&id)?).await?;
    Ok(Json(user))
}

#[tracing::instrument(skip_all)]
pub async fn list_users<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

#[tracing::instrument(skip(state, payload))]
pub async fn update_user<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let payload = validated(payload)?;
    state.users.update(id, payload.into()).await?;
    Ok(StatusCode::OK)
}

#[tracing::instrument(skip(state))]
pub async fn delete_user<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.users.delete(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}

// products

#[tracing::instrument(skip_all)]
pub async fn create_product<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = validated(payload)?;
    let product = state.products.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[tracing::instrument(skip(state))]
pub async fn get_product<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state.products.get(parse_id(&id)?).await?;
    Ok(Json(product))
}

#[tracing::instrument(skip_all)]
pub async fn list_products<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

#[tracing::instrument(skip(state, payload))]
pub async fn update_product<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let payload = validated(payload)?;
    state.products.update(id, payload.into()).await?;
    Ok(StatusCode::OK)
}

#[tracing::instrument(skip(state))]
pub async fn delete_product<U: UserApi, P: ProductApi>(
    State(state): State<Arc<GatewayState<U, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.products.delete(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_garbage_and_non_positive_ids() {
        assert!(parse_id("7").is_ok());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
    }

    #[test]
    fn short_user_fields_fail_validation() {
        let payload = UserPayload {
            first_name: "Al".into(),
            last_name: "Turing".into(),
            username: "al".into(),
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("username"));
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn product_payload_requires_positive_ids_and_stock() {
        let payload = ProductPayload {
            store_id: 0,
            category_id: 1,
            name: "lamp".into(),
            description: "desk lamp".into(),
            price: "9.99".into(),
            image_url: "https://img.example/l.png".into(),
            stock: 0,
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("store_id"));
        assert!(fields.contains_key("stock"));
    }
}

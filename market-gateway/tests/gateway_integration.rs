//! Integration tests for the gateway router.
//!
//! These drive the full middleware + handler stack with in-memory backends
//! and assert the HTTP-level contract: auth short-circuiting, validation
//! bodies, and the status-code translation of backend errors.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use tonic::Status;
use tower::ServiceExt;

use market_client::{ProductApi, UserApi};
use market_gateway::{GatewayServer, TokenVerifier, auth::VerifyError};
use market_types::{NewProduct, NewUser, Product, User};

/// Accepts exactly the token "good-token".
struct StaticVerifier;

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<bool, VerifyError> {
        Ok(token == "good-token")
    }
}

/// Local handle around an `Arc`'d mock; the API traits are foreign, so the
/// orphan rule forbids implementing them on `Arc<Mock…>` directly.
struct Shared<T>(Arc<T>);

/// Backend double whose every call returns a canned result and is counted.
struct MockUsers {
    calls: AtomicUsize,
    response: fn() -> Result<User, Status>,
}

impl MockUsers {
    fn returning(response: fn() -> Result<User, Status>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response,
        })
    }
}

fn sample_user() -> User {
    User {
        id: 1,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        username: "ada".into(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl UserApi for Shared<MockUsers> {
    async fn create(&self, _user: NewUser) -> Result<User, Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)()
    }
    async fn get(&self, _id: i64) -> Result<User, Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)()
    }
    async fn list(&self) -> Result<Vec<User>, Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)().map(|_| Vec::new())
    }
    async fn update(&self, _id: i64, _changes: NewUser) -> Result<(), Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)().map(|_| ())
    }
    async fn delete(&self, _id: i64) -> Result<(), Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)().map(|_| ())
    }
}

struct MockProducts {
    calls: AtomicUsize,
    response: fn() -> Result<Product, Status>,
}

impl MockProducts {
    fn returning(response: fn() -> Result<Product, Status>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response,
        })
    }
}

fn sample_product() -> Product {
    Product {
        id: 1,
        store_id: 1,
        category_id: 1,
        name: "lamp".into(),
        description: "desk lamp".into(),
        price: "24.50".into(),
        image_url: "https://img.example/lamp.png".into(),
        stock: 5,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl ProductApi for Shared<MockProducts> {
    async fn create(&self, _product: NewProduct) -> Result<Product, Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)()
    }
    async fn get(&self, _id: i64) -> Result<Product, Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)()
    }
    async fn list(&self) -> Result<Vec<Product>, Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)().map(|_| Vec::new())
    }
    async fn update(&self, _id: i64, _changes: NewProduct) -> Result<(), Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)().map(|_| ())
    }
    async fn delete(&self, _id: i64) -> Result<(), Status> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        (self.0.response)().map(|_| ())
    }
}

fn router(users: Arc<MockUsers>, products: Arc<MockProducts>) -> Router {
    GatewayServer::new(Shared(users), Shared(products), Arc::new(StaticVerifier)).router()
}

fn authed(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", "Bearer good-token");
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const VALID_USER: &str = r#"{"first_name":"Ada","last_name":"Lovelace","username":"ada_l"}"#;

#[tokio::test]
async fn requests_without_a_token_get_401_and_never_reach_a_backend() {
    let users = MockUsers::returning(|| Ok(sample_user()));
    let products = MockProducts::returning(|| Ok(sample_product()));
    let app = router(users.clone(), products.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error"], "unauthorized");
    assert_eq!(users.calls.load(Ordering::SeqCst), 0);
    assert_eq!(products.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn a_rejected_token_also_gets_401() {
    let users = MockUsers::returning(|| Ok(sample_user()));
    let products = MockProducts::returning(|| Ok(sample_product()));
    let app = router(users.clone(), products);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header("Authorization", "Bearer wrong-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(users.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn health_bypasses_authentication() {
    let app = router(
        MockUsers::returning(|| Ok(sample_user())),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn a_missing_record_becomes_404_with_the_backend_message() {
    let app = router(
        MockUsers::returning(|| Err(Status::not_found("user not found"))),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(authed(Method::GET, "/api/users/42", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "user not found");
}

#[tokio::test]
async fn a_duplicate_becomes_409() {
    let app = router(
        MockUsers::returning(|| {
            Err(Status::already_exists(
                "a record with this value already exists",
            ))
        }),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(authed(Method::POST, "/api/users", Some(VALID_USER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await["error"],
        "a record with this value already exists"
    );
}

#[tokio::test]
async fn an_invalid_reference_becomes_400() {
    let app = router(
        MockUsers::returning(|| Ok(sample_user())),
        MockProducts::returning(|| {
            Err(Status::invalid_argument(
                "ensure the referenced record exists",
            ))
        }),
    );

    let body = r#"{"store_id":99,"category_id":1,"name":"lamp","description":"desk lamp","price":"24.50","image_url":"https://img.example/lamp.png","stock":5}"#;
    let response = app
        .oneshot(authed(Method::POST, "/api/products", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn backend_unknown_errors_become_500() {
    let app = router(
        MockUsers::returning(|| Err(Status::unknown("storage call did not complete"))),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(authed(Method::GET, "/api/users", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn invalid_payloads_get_a_field_map_and_never_reach_a_backend() {
    let users = MockUsers::returning(|| Ok(sample_user()));
    let app = router(users.clone(), MockProducts::returning(|| Ok(sample_product())));

    let body = r#"{"first_name":"Al","last_name":"Turing","username":"al"}"#;
    let response = app
        .oneshot(authed(Method::POST, "/api/users", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let errors = &json_body(response).await["errors"];
    assert!(errors.get("first_name").is_some());
    assert!(errors.get("username").is_some());
    assert!(errors.get("last_name").is_none());
    assert_eq!(users.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_json_is_400_not_500() {
    let app = router(
        MockUsers::returning(|| Ok(sample_user())),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(authed(Method::POST, "/api/users", Some("{not json")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn a_non_numeric_id_is_400() {
    let app = router(
        MockUsers::returning(|| Ok(sample_user())),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(authed(Method::GET, "/api/users/abc", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "invalid id");
}

#[tokio::test]
async fn an_empty_listing_is_200_with_an_empty_array() {
    let app = router(
        MockUsers::returning(|| Ok(sample_user())),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(authed(Method::GET, "/api/products", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"[]");
}

#[tokio::test]
async fn create_returns_201_with_the_stored_record() {
    let app = router(
        MockUsers::returning(|| Ok(sample_user())),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .oneshot(authed(Method::POST, "/api/users", Some(VALID_USER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "ada");
}

#[tokio::test]
async fn update_and_delete_return_200_with_no_payload() {
    let app = router(
        MockUsers::returning(|| Ok(sample_user())),
        MockProducts::returning(|| Ok(sample_product())),
    );

    let response = app
        .clone()
        .oneshot(authed(Method::PUT, "/api/users/1", Some(VALID_USER)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(authed(Method::DELETE, "/api/products/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

//! HTTP gateway in front of the user and product gRPC services.
//!
//! Every `/api` route sits behind bearer-token authentication; payloads are
//! validated before a backend is called, and backend statuses are translated
//! into HTTP responses in one place ([`error::ApiError`]).

pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;

pub use auth::{HttpTokenVerifier, TokenVerifier};
pub use error::ApiError;
pub use handlers::GatewayState;
pub use server::GatewayServer;

//! Bearer-token authentication middleware.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Upstream failure while checking a token. Distinct from a rejection: a
/// rejected token is a normal `Ok(false)`.
#[derive(Debug, thiserror::Error)]
#[error("token verification failed: {0}")]
pub struct VerifyError(pub String);

/// Decides whether a bearer token is valid.
#[async_trait]
pub trait TokenVerifier: Send + Sync + 'static {
    async fn verify(&self, token: &str) -> Result<bool, VerifyError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
/// A bare or empty token is rejected.
fn bearer_token(auth_header: Option<&str>) -> Option<&str> {
    let token = auth_header?.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token) }
}

/// Gate in front of every `/api` route; `/health` passes through.
/// A missing, malformed, or rejected token short-circuits with 401 before
/// any backend call is made. Verifier outages also fail closed.
pub async fn auth_middleware(
    State(verifier): State<Arc<dyn TokenVerifier>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let Some(token) = bearer_token(auth_header) else {
        return ApiError::Unauthorized.into_response();
    };

    match verifier.verify(token).await {
        Ok(true) => next.run(request).await,
        Ok(false) => ApiError::Unauthorized.into_response(),
        Err(err) => {
            tracing::error!(%err, "token verification unavailable");
            ApiError::Unauthorized.into_response()
        }
    }
}

/// Verifier that delegates to an identity service over HTTP. A 2xx response
/// accepts the token; 401 and 403 reject it; anything else is an upstream
/// failure.
pub struct HttpTokenVerifier {
    verify_url: String,
    http: reqwest::Client,
}

impl HttpTokenVerifier {
    pub fn new(verify_url: impl Into<String>) -> Self {
        Self {
            verify_url: verify_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<bool, VerifyError> {
        let response = self
            .http
            .get(&self.verify_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| VerifyError(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(true)
        } else if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            Ok(false)
        } else {
            Err(VerifyError(format!("identity service returned {status}")))
        }
    }
}

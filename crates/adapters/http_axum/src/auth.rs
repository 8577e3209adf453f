//! Bearer-token gate for the resource routes.
//!
//! Token issuance lives elsewhere; this middleware only verifies an
//! HS256-signed JWT against the configured secret and rejects the
//! request with 401 otherwise. The verified identity is not used beyond
//! gating.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Claims carried by accepted tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the authenticated principal.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Decoding key and validation rules for bearer tokens.
pub struct AuthKeys {
    decoding: DecodingKey,
    validation: Validation,
}

impl AuthKeys {
    /// Build keys from the shared HS256 secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is malformed, expired, or signed
    /// with a different secret.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

/// Middleware rejecting requests without a valid `Authorization: Bearer`
/// header.
pub async fn require_auth<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized("missing bearer token"))?;

    state.auth.verify(token).map_err(|err| {
        tracing::warn!(error = %err, "rejected bearer token");
        ApiError::Unauthorized("invalid bearer token")
    })?;

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token(secret: &str, exp: usize) -> String {
        encode(
            &Header::default(),
            &Claims {
                sub: "tester".to_string(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    const FAR_FUTURE: usize = 4_102_444_800; // 2100-01-01

    #[test]
    fn should_accept_token_signed_with_same_secret() {
        let keys = AuthKeys::new("secret");
        let claims = keys.verify(&token("secret", FAR_FUTURE)).unwrap();
        assert_eq!(claims.sub, "tester");
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let keys = AuthKeys::new("secret");
        assert!(keys.verify(&token("other", FAR_FUTURE)).is_err());
    }

    #[test]
    fn should_reject_expired_token() {
        let keys = AuthKeys::new("secret");
        assert!(keys.verify(&token("secret", 1)).is_err());
    }

    #[test]
    fn should_reject_garbage_token() {
        let keys = AuthKeys::new("secret");
        assert!(keys.verify("not-a-jwt").is_err());
    }
}

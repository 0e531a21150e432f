use super::handlers::AppState;
use super::types::{ErrorResponse, reject};
use crate::Error;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::Json,
};

/// Verified caller identity. Extraction fails with an unauthenticated error
/// unless the request carries the configured bearer token; placed before the
/// body extractor in handler signatures so auth failures win over argument
/// failures.
pub struct CallerIdentity;

#[async_trait]
impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) if !token.is_empty() && token == state.bearer_token.as_str() => {
                Ok(CallerIdentity)
            }
            _ => Err(reject(Error::unauthenticated("Must be signed in."))),
        }
    }
}

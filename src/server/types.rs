use crate::{Error, Result};
use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Body shared by both callable endpoints. The image field is kept loose on
/// purpose: missing, non-string and empty values must all surface as an
/// invalid-argument failure rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub image: Option<serde_json::Value>,
}

impl ImageRequest {
    pub fn image_payload(&self) -> Result<&str> {
        match self.image.as_ref().and_then(|v| v.as_str()) {
            Some(image) if !image.is_empty() => Ok(image),
            _ => Err(Error::invalid_argument("Missing image (base64).")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModerationResponse {
    pub allowed: bool,
    #[serde(rename = "containsCat", skip_serializing_if = "Option::is_none")]
    pub contains_cat: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    #[serde(rename = "containsCat")]
    pub contains_cat: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
}

/// The single place an `Error` becomes a public failure. Boundary kinds map
/// to their own status; everything else is an internal failure.
pub fn reject(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code, message) = match err {
        Error::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, "unauthenticated", msg),
        Error::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, "invalid-argument", msg),
        Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            other.to_string(),
        ),
    };

    (
        status,
        Json(ErrorResponse {
            code: code.to_string(),
            error: message,
        }),
    )
}

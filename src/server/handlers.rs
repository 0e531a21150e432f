use super::auth::CallerIdentity;
use super::types::{
    DetectionResponse, ErrorResponse, ImageRequest, ModerationResponse, reject,
};
use crate::moderation::{self, CatMatcher};
use crate::vision::VisionClient;
use crate::Error;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub vision: Arc<dyn VisionClient>,
    pub matcher: Arc<CatMatcher>,
    pub bearer_token: String,
}

/// Callable: moderateChatImage. Fans out safe-search and label detection
/// concurrently; fail-closed on any dependency failure.
pub async fn moderate_chat_image(
    State(state): State<AppState>,
    _caller: CallerIdentity,
    Json(request): Json<ImageRequest>,
) -> Result<Json<ModerationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let image = request.image_payload().map_err(reject)?;

    info!("Received moderation request ({} bytes base64)", image.len());

    let (safe, labels) = tokio::join!(
        state.vision.safe_search(image),
        state.vision.detect_labels(image),
    );

    let (annotation, labels) = match (safe, labels) {
        (Ok(annotation), Ok(labels)) => (annotation, labels),
        (Err(e), _) | (_, Err(e)) => {
            error!("Vision annotation failed during moderation: {}", e);
            return Err(reject(Error::internal("Image check failed.")));
        }
    };

    let allowed = moderation::is_allowed(annotation.as_ref());
    let contains_cat = state.matcher.contains_cat(&labels);

    info!(
        "Moderation verdict: allowed={}, containsCat={}",
        allowed, contains_cat
    );

    Ok(Json(ModerationResponse {
        allowed,
        contains_cat: Some(contains_cat),
    }))
}

/// Callable: detectCatInImage. Fail-open: a dependency failure only loses a
/// cosmetic blur, so it degrades to "no cat" instead of failing the call.
pub async fn detect_cat_in_image(
    State(state): State<AppState>,
    _caller: CallerIdentity,
    Json(request): Json<ImageRequest>,
) -> Result<Json<DetectionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let image = request.image_payload().map_err(reject)?;

    info!("Received cat detection request ({} bytes base64)", image.len());

    let contains_cat = match state.vision.detect_labels(image).await {
        Ok(labels) => state.matcher.contains_cat(&labels),
        Err(e) => {
            warn!("Label detection failed, defaulting to no cat: {}", e);
            false
        }
    };

    Ok(Json(DetectionResponse { contains_cat }))
}

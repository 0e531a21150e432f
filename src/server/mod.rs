pub mod auth;
pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    moderation::CatMatcher,
    vision::{HttpVisionClient, VisionClient},
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/moderateChatImage", post(handlers::moderate_chat_image))
        .route("/detectCatInImage", post(handlers::detect_cat_in_image))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Construct the annotation client once; handlers share it via state.
    let vision: Arc<dyn VisionClient> = Arc::new(HttpVisionClient::new(config.vision.clone()));
    let matcher = Arc::new(CatMatcher::new(&config.moderation)?);

    let state = AppState {
        vision,
        matcher,
        bearer_token: config.auth.bearer_token.clone(),
    };

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(GlobalConcurrencyLimitLayer::new(
            config.server.max_concurrency,
        ));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

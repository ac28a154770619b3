use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::alexa;
use crate::state::AppState;

/// Path the Alexa skill endpoint is configured with
pub const ALEXA_WEBHOOK_PATH: &str = "/api/v1/webhook-alexa";

/// Create the webhook router
///
/// No authentication: the skill accepts every request the platform sends.
pub fn create_webhook_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(ALEXA_WEBHOOK_PATH, post(alexa::alexa_webhook))
        .layer(TraceLayer::new_for_http())
}

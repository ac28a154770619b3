use axum::{body::Bytes, extract::State, response::Json};
use std::sync::Arc;
use tracing::{Instrument, info_span};

use crate::core::skill::dispatcher::{DispatchError, fallback_response};
use crate::core::skill::{RequestEnvelope, ResponseEnvelope};
use crate::state::AppState;

/// Alexa skill webhook
///
/// Decodes the request envelope, runs the dispatcher and encodes the reply.
/// Always answers 200: failures are reported to the user as spoken text,
/// including bodies that are not a valid envelope.
pub async fn alexa_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<ResponseEnvelope> {
    let envelope: RequestEnvelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            let payload = fallback_response(&DispatchError::from(e));
            return Json(ResponseEnvelope::new(payload, None));
        }
    };

    let request = &envelope.request;
    let span = info_span!(
        "alexa_request",
        request_id = request.request_id().unwrap_or("-"),
        request_type = request.request_type(),
        intent = request.intent_name().unwrap_or("-"),
    );

    let payload = state.dispatcher.dispatch(request).instrument(span).await;

    Json(ResponseEnvelope::new(
        payload,
        envelope.session_attributes().cloned(),
    ))
}

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use thiserror::Error;
use tracing::{debug, error};

use super::handlers::IntentHandler;
use super::{InboundEvent, ResponsePayload};
use crate::core::answer::AnswerSource;

/// Spoken whenever no handler could produce a reply
pub const APOLOGY_TEXT: &str = "Sorry, I encountered an issue. Please try again.";

/// Reasons a request ends up in the fallback branch
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request body is not a valid Alexa request envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),

    #[error("no handler matches request type {request_type} (intent: {intent:?})")]
    NoHandler {
        request_type: String,
        intent: Option<String>,
    },

    #[error("handler {handler} panicked: {message}")]
    HandlerPanicked {
        handler: &'static str,
        message: String,
    },
}

/// First-match dispatcher over the skill's handlers
///
/// Handlers are tried in [`IntentHandler::ORDERED`] order and the first whose
/// matcher accepts the event produces the reply. When nothing matches, or the
/// selected handler panics, the fallback apology is returned instead.
#[derive(Clone)]
pub struct IntentDispatcher {
    handlers: Vec<IntentHandler>,
    answers: Arc<dyn AnswerSource>,
}

impl IntentDispatcher {
    pub fn new(answers: Arc<dyn AnswerSource>) -> Self {
        Self {
            handlers: IntentHandler::ORDERED.to_vec(),
            answers,
        }
    }

    /// The handler that would serve `event`, if any
    pub fn select(&self, event: &InboundEvent) -> Option<IntentHandler> {
        self.handlers
            .iter()
            .copied()
            .find(|handler| handler.matches(event))
    }

    pub async fn dispatch(&self, event: &InboundEvent) -> ResponsePayload {
        match self.try_dispatch(event).await {
            Ok(payload) => payload,
            Err(e) => fallback_response(&e),
        }
    }

    async fn try_dispatch(&self, event: &InboundEvent) -> Result<ResponsePayload, DispatchError> {
        let handler = self.select(event).ok_or_else(|| DispatchError::NoHandler {
            request_type: event.request_type().to_string(),
            intent: event.intent_name().map(str::to_string),
        })?;
        debug!(handler = handler.name(), "Selected request handler");

        AssertUnwindSafe(handler.handle(event, self.answers.as_ref()))
            .catch_unwind()
            .await
            .map_err(|panic| DispatchError::HandlerPanicked {
                handler: handler.name(),
                message: panic_message(&*panic),
            })
    }
}

/// Log `error` and build the apology reply.
pub fn fallback_response(error: &DispatchError) -> ResponsePayload {
    error!(error = %error, "Error handled");
    ResponsePayload::speak(APOLOGY_TEXT)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

//! Alexa skill logic
//!
//! Inbound platform events are decoded into [`InboundEvent`], classified by
//! [`IntentDispatcher`] and answered with a [`ResponsePayload`], which the
//! envelope module turns back into the platform's JSON response format.

pub mod dispatcher;
pub mod envelope;
pub mod handlers;

pub use dispatcher::{DispatchError, IntentDispatcher};
pub use envelope::{InboundEvent, Intent, RequestEnvelope, ResponseEnvelope, Session, Slot};
pub use handlers::IntentHandler;

/// What the skill says back for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePayload {
    pub speech_text: String,
    pub reprompt_text: Option<String>,
    pub should_end_session: bool,
}

impl ResponsePayload {
    /// Speak `text` and let the session end.
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            speech_text: text.into(),
            reprompt_text: None,
            should_end_session: true,
        }
    }

    /// Speak `text` and keep listening, repeating `reprompt` if the user stays silent.
    pub fn speak_with_reprompt(text: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech_text: text.into(),
            reprompt_text: Some(reprompt.into()),
            should_end_session: false,
        }
    }
}

//! Alexa wire format
//!
//! Only the parts of the request envelope the skill reads are modelled;
//! everything else in the platform JSON is ignored on decode.

use std::collections::HashMap;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::ResponsePayload;

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    pub session: Option<Session>,
    pub request: InboundEvent,
}

impl RequestEnvelope {
    pub fn session_attributes(&self) -> Option<&Map<String, Value>> {
        self.session.as_ref()?.attributes.as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: Option<String>,
    pub new: Option<bool>,
    pub attributes: Option<Map<String, Value>>,
}

/// Fields shared by every request type
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    pub request_id: Option<String>,
    pub timestamp: Option<String>,
    pub locale: Option<String>,
}

/// One inbound platform event, keyed by `request.type`
#[derive(Debug, Clone)]
pub enum InboundEvent {
    LaunchRequest(RequestMeta),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    /// Any request type the skill has no handler for
    Unsupported {
        request_type: String,
        meta: RequestMeta,
    },
}

impl<'de> Deserialize<'de> for InboundEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let request_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?
            .to_string();

        let event = match request_type.as_str() {
            "LaunchRequest" => Self::LaunchRequest(decode_as::<_, D::Error>(value)?),
            "IntentRequest" => Self::IntentRequest(decode_as::<_, D::Error>(value)?),
            "SessionEndedRequest" => Self::SessionEndedRequest(decode_as::<_, D::Error>(value)?),
            // Unknown request shapes vary; keep whatever metadata parses.
            _ => Self::Unsupported {
                meta: serde_json::from_value(value).unwrap_or_default(),
                request_type,
            },
        };
        Ok(event)
    }
}

fn decode_as<T: DeserializeOwned, E: de::Error>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    pub intent: Intent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionEndedRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    /// Slots by name; the platform sends `null` for slots it could not fill.
    pub slots: Option<HashMap<String, Option<Slot>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slot {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl InboundEvent {
    /// The `request.type` string as sent by the platform
    pub fn request_type(&self) -> &str {
        match self {
            Self::LaunchRequest(_) => "LaunchRequest",
            Self::IntentRequest(_) => "IntentRequest",
            Self::SessionEndedRequest(_) => "SessionEndedRequest",
            Self::Unsupported { request_type, .. } => request_type.as_str(),
        }
    }

    pub fn meta(&self) -> &RequestMeta {
        match self {
            Self::LaunchRequest(meta) => meta,
            Self::IntentRequest(request) => &request.meta,
            Self::SessionEndedRequest(request) => &request.meta,
            Self::Unsupported { meta, .. } => meta,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta().request_id.as_deref()
    }

    /// Intent name for `IntentRequest` events
    pub fn intent_name(&self) -> Option<&str> {
        match self {
            Self::IntentRequest(request) => Some(request.intent.name.as_str()),
            _ => None,
        }
    }

    /// Value of the named slot, if the event is an intent carrying it
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        let Self::IntentRequest(request) = self else {
            return None;
        };
        request
            .intent
            .slots
            .as_ref()?
            .get(slot)?
            .as_ref()?
            .value
            .as_deref()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Map<String, Value>>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML",
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }
}

impl ResponseEnvelope {
    /// Wrap a payload, echoing the caller's session attributes back unchanged.
    pub fn new(payload: ResponsePayload, session_attributes: Option<Map<String, Value>>) -> Self {
        Self {
            version: RESPONSE_VERSION,
            session_attributes,
            response: ResponseBody {
                output_speech: OutputSpeech::ssml(&payload.speech_text),
                reprompt: payload.reprompt_text.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                should_end_session: payload.should_end_session,
            },
        }
    }
}

/// Escape the characters SSML treats as markup.
fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

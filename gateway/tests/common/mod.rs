//! Shared helpers for the webhook integration tests

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use axum::{Router, body::Body, http::Request};
use serde_json::{Value, json};
use tower::util::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use findus_gateway::{AppState, ServerConfig, build_router};

pub const ANSWER_PATH: &str = "/apps/bot_findus-main/api/email/";

/// Configuration pointing the answer API at `answer_base` (a mock server URI)
pub fn create_test_config(answer_base: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        answer_api_url: format!("{answer_base}{ANSWER_PATH}"),
        answer_timeout_seconds: 2,
    }
}

pub fn create_app(answer_base: &str) -> Router {
    let state = AppState::new(create_test_config(answer_base)).expect("state should build");
    build_router(state)
}

pub fn launch_envelope() -> Value {
    envelope(json!({
        "type": "LaunchRequest",
        "requestId": "amzn1.echo-api.request.launch",
        "timestamp": "2026-10-14T08:00:00Z",
        "locale": "de-DE"
    }))
}

pub fn intent_envelope(name: &str) -> Value {
    envelope(json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.intent",
        "timestamp": "2026-10-14T08:00:00Z",
        "locale": "de-DE",
        "intent": {"name": name, "confirmationStatus": "NONE"}
    }))
}

pub fn question_envelope(question: Option<&str>) -> Value {
    let slot = match question {
        Some(value) => json!({"name": "content", "value": value, "confirmationStatus": "NONE"}),
        None => json!({"name": "content", "confirmationStatus": "NONE"}),
    };
    envelope(json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.question",
        "timestamp": "2026-10-14T08:00:00Z",
        "locale": "de-DE",
        "intent": {
            "name": "QuestionIntent",
            "confirmationStatus": "NONE",
            "slots": {"content": slot}
        }
    }))
}

pub fn envelope(request: Value) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.test",
            "application": {"applicationId": "amzn1.ask.skill.test"},
            "attributes": {},
            "user": {"userId": "amzn1.ask.account.test"}
        },
        "context": {
            "System": {
                "application": {"applicationId": "amzn1.ask.skill.test"},
                "device": {"deviceId": "amzn1.ask.device.test"}
            }
        },
        "request": request
    })
}

/// POST a raw body to the webhook and return status and decoded JSON body
pub async fn post_raw(app: &Router, body: String) -> (axum::http::StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/webhook-alexa")
        .header("content-type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

pub async fn post_envelope(app: &Router, envelope: &Value) -> (axum::http::StatusCode, Value) {
    post_raw(app, envelope.to_string()).await
}

pub fn ssml(text: &str) -> String {
    format!("<speak>{text}</speak>")
}

/// Log sink for asserting on emitted tracing events
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

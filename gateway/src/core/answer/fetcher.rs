use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::{AnswerFetchError, AnswerSource, FETCH_ERROR_TEXT, NO_ANSWER_TEXT};
use crate::config::ServerConfig;

#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    content: &'a str,
}

/// [`AnswerSource`] backed by the question-answering HTTP API
///
/// Issues exactly one `POST {"content": question}` per call. No retries and
/// no caching; the client's timeout bounds how long a hanging endpoint can
/// hold up a single webhook request.
#[derive(Debug, Clone)]
pub struct HttpAnswerFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnswerFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.answer_api_url.clone(), config.answer_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform the call and extract the answer.
    ///
    /// `Ok(None)` means the API responded 200 without a usable answer.
    async fn request_answer(&self, question: &str) -> Result<Option<String>, AnswerFetchError> {
        debug!(endpoint = %self.endpoint, "Sending answer API request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&AnswerRequest { content: question })
            .send()
            .await?;

        let status = response.status();
        info!(status = status.as_u16(), "Answer API responded");

        if status != StatusCode::OK {
            return Err(AnswerFetchError::Status(status));
        }

        let body = response.bytes().await?;
        let data: Value = serde_json::from_slice(&body)?;
        debug!(body = %data, "Answer API response body");

        Ok(extract_answer(&data))
    }
}

#[async_trait]
impl AnswerSource for HttpAnswerFetcher {
    async fn fetch_answer(&self, question: &str) -> String {
        match self.request_answer(question).await {
            Ok(Some(answer)) => {
                info!(answer = %answer, "Answer API returned an answer");
                answer
            }
            Ok(None) => {
                warn!("Answer API response did not contain an answer");
                NO_ANSWER_TEXT.to_string()
            }
            Err(e) => {
                error!(error = %e, endpoint = %self.endpoint, "Error fetching answer from API");
                FETCH_ERROR_TEXT.to_string()
            }
        }
    }
}

/// Pull a truthy `answer` field out of the response body.
///
/// Null, `false`, `0`, and empty strings do not count as an answer. Other
/// non-string values are spoken as their JSON text.
fn extract_answer(data: &Value) -> Option<String> {
    match data.get("answer")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

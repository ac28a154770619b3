//! Question answering backend
//!
//! The skill forwards the user's question to a single HTTP endpoint and speaks
//! whatever comes back. [`AnswerSource`] is the seam between the intent
//! handlers and that endpoint; [`HttpAnswerFetcher`] is the production
//! implementation.
//!
//! Fetching never fails from the caller's point of view: every error path is
//! logged and collapsed into one of the fixed fallback sentences below.

mod fetcher;

use async_trait::async_trait;
use thiserror::Error;

pub use fetcher::HttpAnswerFetcher;

/// Spoken when the API answered 200 but carried no usable `answer`
pub const NO_ANSWER_TEXT: &str = "I could not find the answer to your question.";

/// Spoken when the API call failed (transport, timeout, status or body)
pub const FETCH_ERROR_TEXT: &str = "I encountered an error while fetching the answer.";

/// Source of answers for free-text questions
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Return the text to speak for `question`.
    ///
    /// Callers only pass non-empty questions.
    async fn fetch_answer(&self, question: &str) -> String;
}

/// Why a remote answer could not be obtained
#[derive(Debug, Error)]
pub enum AnswerFetchError {
    #[error("request to answer API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("answer API returned unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("answer API returned a body that is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

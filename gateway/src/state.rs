use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::answer::{AnswerSource, HttpAnswerFetcher};
use crate::core::skill::IntentDispatcher;
use crate::errors::app_error::AppResult;

/// Shared, read-only state handed to every request
pub struct AppState {
    pub config: ServerConfig,
    pub dispatcher: IntentDispatcher,
}

impl AppState {
    /// Build the state with the HTTP answer fetcher configured from `config`.
    pub fn new(config: ServerConfig) -> AppResult<Arc<Self>> {
        let fetcher = HttpAnswerFetcher::from_config(&config)?;
        tracing::info!(
            endpoint = fetcher.endpoint(),
            timeout_seconds = config.answer_timeout_seconds,
            "Answer API configured"
        );
        Ok(Self::with_answer_source(config, Arc::new(fetcher)))
    }

    /// Build the state around an arbitrary answer source.
    pub fn with_answer_source(config: ServerConfig, answers: Arc<dyn AnswerSource>) -> Arc<Self> {
        Arc::new(Self {
            config,
            dispatcher: IntentDispatcher::new(answers),
        })
    }
}

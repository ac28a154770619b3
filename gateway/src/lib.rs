pub mod config;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;

// Re-export commonly used items for convenience
pub use config::ServerConfig;
pub use crate::core::{
    AnswerSource, HttpAnswerFetcher, InboundEvent, IntentDispatcher, ResponsePayload,
};
pub use errors::app_error::{AppError, AppResult};
pub use server::{build_router, start_server};
pub use state::AppState;

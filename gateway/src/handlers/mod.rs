//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `alexa` - Alexa skill webhook

pub mod alexa;
pub mod api;

pub use alexa::alexa_webhook;

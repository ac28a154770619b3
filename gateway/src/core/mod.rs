pub mod answer;
pub mod skill;

pub use answer::{AnswerSource, HttpAnswerFetcher};
pub use skill::{InboundEvent, IntentDispatcher, ResponsePayload};

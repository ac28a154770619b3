//! Request handlers of the skill
//!
//! Each [`IntentHandler`] variant pairs a pure matcher with the code that
//! builds its reply. The order of [`IntentHandler::ORDERED`] is the dispatch
//! order.

use tracing::info;

use super::{InboundEvent, ResponsePayload};
use crate::core::answer::AnswerSource;

pub const WELCOME_TEXT: &str = "Ich bin RoBot, ihr digitaler Assistent der Stadt Rosenheim. Ich freue mich mich darauf, Ihnen bei Fragen der Stadt Rosenheim zu helfen. Wie kann ich helfen ?";
pub const HELP_TEXT: &str = "How can I help you today?";
pub const HELP_REPROMPT_TEXT: &str =
    "Please let me know if you have a question or need assistance.";
pub const GOODBYE_TEXT: &str = "Goodbye!";
pub const MISSING_QUESTION_TEXT: &str = "I didn’t catch your question. Can you please ask again?";
pub const EMPTY_ANSWER_TEXT: &str =
    "I'm sorry, I couldn't find an answer to your question. Please try again.";

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const QUESTION_INTENT: &str = "QuestionIntent";

/// Slot of `QuestionIntent` holding the free-text question
pub const QUESTION_SLOT: &str = "content";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentHandler {
    Launch,
    Help,
    CancelOrStop,
    Question,
}

impl IntentHandler {
    pub const ORDERED: [IntentHandler; 4] = [
        IntentHandler::Launch,
        IntentHandler::Help,
        IntentHandler::CancelOrStop,
        IntentHandler::Question,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Launch => "Launch",
            Self::Help => "Help",
            Self::CancelOrStop => "CancelOrStop",
            Self::Question => "Question",
        }
    }

    pub fn matches(self, event: &InboundEvent) -> bool {
        match self {
            Self::Launch => is_launch(event),
            Self::Help => is_help(event),
            Self::CancelOrStop => is_cancel_or_stop(event),
            Self::Question => is_question(event),
        }
    }

    pub async fn handle(self, event: &InboundEvent, answers: &dyn AnswerSource) -> ResponsePayload {
        match self {
            Self::Launch => ResponsePayload::speak_with_reprompt(WELCOME_TEXT, WELCOME_TEXT),
            Self::Help => ResponsePayload::speak_with_reprompt(HELP_TEXT, HELP_REPROMPT_TEXT),
            Self::CancelOrStop => ResponsePayload::speak(GOODBYE_TEXT),
            Self::Question => answer_question(event, answers).await,
        }
    }
}

pub fn is_launch(event: &InboundEvent) -> bool {
    matches!(event, InboundEvent::LaunchRequest(_))
}

pub fn is_help(event: &InboundEvent) -> bool {
    event.intent_name() == Some(HELP_INTENT)
}

pub fn is_cancel_or_stop(event: &InboundEvent) -> bool {
    matches!(event.intent_name(), Some(CANCEL_INTENT | STOP_INTENT))
}

pub fn is_question(event: &InboundEvent) -> bool {
    event.intent_name() == Some(QUESTION_INTENT)
}

/// The asked question, trimmed; `None` when the slot is absent or blank.
pub fn question_of(event: &InboundEvent) -> Option<&str> {
    event
        .slot_value(QUESTION_SLOT)
        .map(str::trim)
        .filter(|question| !question.is_empty())
}

async fn answer_question(event: &InboundEvent, answers: &dyn AnswerSource) -> ResponsePayload {
    let Some(question) = question_of(event) else {
        info!("QuestionIntent without a question");
        return ResponsePayload::speak(MISSING_QUESTION_TEXT);
    };

    info!(question = %question, "Received question");
    let answer = answers.fetch_answer(question).await;
    info!(answer = %answer, "Answer for question");

    if answer.trim().is_empty() {
        return ResponsePayload::speak(EMPTY_ANSWER_TEXT);
    }
    ResponsePayload::speak(answer)
}

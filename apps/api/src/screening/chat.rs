//! Screening transitions: question generation, chat send, history toggle.
//!
//! Flow per user event: read input → at most one completion call → write the
//! outcome into the session → the caller re-reads the full session state.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::Dispatcher;
use crate::screening::models::CandidateForm;
use crate::screening::prompts::{self, EMPTY_TECH_STACK_WARNING, FAREWELL, SYSTEM_PROMPT};
use crate::session::{Session, Speaker};

/// Outcome of one "send" event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Empty input: nothing appended, nothing dispatched.
    Ignored,
    /// Exit keyword: farewell appended, no completion call.
    Ended,
    /// Regular message: one completion call, two entries appended.
    Answered,
}

/// Generates interview questions from the declared tech stack.
///
/// An empty tech stack is rejected locally: no completion call is made and
/// the session is untouched. Otherwise the dispatcher's result — success text
/// or its formatted failure string — replaces any previously generated
/// questions.
pub async fn generate_questions(
    session: &mut Session,
    dispatcher: &Dispatcher,
    form: &CandidateForm,
) -> Result<(), AppError> {
    form.validate()?;

    if form.tech_stack.is_empty() {
        return Err(AppError::Validation(EMPTY_TECH_STACK_WARNING.to_string()));
    }

    info!("generating questions for session {}", session.id);
    let prompt = prompts::question_prompt(&form.tech_stack);
    session.generated_questions = dispatcher.ask(SYSTEM_PROMPT, &prompt).await;

    Ok(())
}

/// Handles one "send" event against the session.
///
/// Exit keywords end the conversation with a fixed farewell and skip the
/// dispatcher entirely. Any other non-empty input makes exactly one
/// completion call, then appends (User, input) followed by (Assistant,
/// result) — in that order.
pub async fn send_message(
    session: &mut Session,
    dispatcher: &Dispatcher,
    input: &str,
) -> ChatOutcome {
    if input.is_empty() {
        return ChatOutcome::Ignored;
    }

    if prompts::is_exit_keyword(input) {
        info!("session {} ended by exit keyword", session.id);
        session.append(Speaker::Assistant, FAREWELL);
        return ChatOutcome::Ended;
    }

    let response = dispatcher.ask(SYSTEM_PROMPT, input).await;
    session.append(Speaker::User, input);
    session.append(Speaker::Assistant, response);
    ChatOutcome::Answered
}

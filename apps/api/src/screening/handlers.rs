//! Axum route handlers for the screening API.
//!
//! Every mutating handler responds with a fresh [`SessionView`] snapshot, so
//! each event behaves like the original UI's whole-page refresh: the client
//! re-renders entirely from what it receives, never from deltas.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::chat;
use crate::screening::models::CandidateForm;
use crate::session::{ConversationEntry, Session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatSendRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct IntroResponse {
    pub title: String,
    pub body: String,
}

/// Full state snapshot of one session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub generated_questions: String,
    /// Last entry's text when the assistant spoke last, otherwise empty.
    pub latest_response: String,
    pub history_visible: bool,
    /// Toggle button label, mirroring `history_visible`.
    pub history_label: String,
    /// Full conversation log, present only while history is visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ConversationEntry>>,
}

impl SessionView {
    fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            generated_questions: session.generated_questions.clone(),
            latest_response: session.latest_response().unwrap_or_default().to_string(),
            history_visible: session.history_visible,
            history_label: if session.history_visible {
                "Hide Chat History".to_string()
            } else {
                "Show Chat History".to_string()
            },
            history: session
                .history_visible
                .then(|| session.history().to_vec()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/intro
///
/// Serves the introduction panel copy.
pub async fn handle_intro() -> Json<IntroResponse> {
    Json(IntroResponse {
        title: "Welcome to TalentScout Hiring Assistant!".to_string(),
        body: "I'm TalentScout, your AI-powered hiring assistant. I streamline the initial \
               candidate screening process by collecting your details, generating technical \
               questions based on your declared tech stack, and maintaining context \
               throughout our conversation. Enter your details to generate questions, then \
               switch to the chat to proceed with the screening process."
            .to_string(),
    })
}

/// POST /api/v1/sessions
///
/// Registers a fresh session and returns its initial snapshot.
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionView> {
    let handle = state.sessions.create();
    let session = handle.lock().await;
    Json(SessionView::from_session(&session))
}

/// GET /api/v1/sessions/:id
///
/// Returns the current snapshot, creating a default session for unknown ids —
/// the store's get-or-create contract stands in for "first visit".
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<SessionView> {
    let handle = state.sessions.get(id);
    let session = handle.lock().await;
    Json(SessionView::from_session(&session))
}

/// POST /api/v1/sessions/:id/questions
///
/// Generates interview questions from the submitted candidate form. An empty
/// tech stack is a 400 with an inline warning; nothing is dispatched.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<CandidateForm>,
) -> Result<Json<SessionView>, AppError> {
    let handle = state.sessions.get(id);
    let mut session = handle.lock().await;

    chat::generate_questions(&mut session, &state.dispatcher, &form).await?;

    Ok(Json(SessionView::from_session(&session)))
}

/// POST /api/v1/sessions/:id/chat
///
/// Handles one "send" event. Empty input changes nothing; the snapshot comes
/// back unchanged.
pub async fn handle_chat_send(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatSendRequest>,
) -> Json<SessionView> {
    let handle = state.sessions.get(id);
    let mut session = handle.lock().await;

    chat::send_message(&mut session, &state.dispatcher, &request.message).await;

    Json(SessionView::from_session(&session))
}

/// POST /api/v1/sessions/:id/history/toggle
pub async fn handle_toggle_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<SessionView> {
    let handle = state.sessions.get(id);
    let mut session = handle.lock().await;

    session.toggle_history();

    Json(SessionView::from_session(&session))
}

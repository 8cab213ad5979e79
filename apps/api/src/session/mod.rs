//! Per-candidate screening session state.
//!
//! One authoritative append-only conversation log backs two read
//! projections: the latest-response view and the full-history view.
//! Sessions are keyed by Uuid and live in memory for the process lifetime.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Who produced a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One (speaker, text) pair in the conversation log.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// All state owned by one candidate's session.
///
/// The candidate form is deliberately NOT stored here — it is transient and
/// re-submitted with each question-generation request.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    log: Vec<ConversationEntry>,
    /// Last generated question set. Overwritten on each generation, never
    /// appended to.
    pub generated_questions: String,
    pub history_visible: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(id: Uuid) -> Self {
        Self {
            id,
            log: Vec::new(),
            generated_questions: String::new(),
            history_visible: false,
            created_at: Utc::now(),
        }
    }

    /// Appends one entry. The log is append-only: entries are never
    /// reordered or removed for the life of the session.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.log.push(ConversationEntry {
            speaker,
            text: text.into(),
        });
    }

    /// Latest-response projection: the last entry's text, only when that
    /// entry was spoken by the assistant.
    pub fn latest_response(&self) -> Option<&str> {
        match self.log.last() {
            Some(entry) if entry.speaker == Speaker::Assistant => Some(&entry.text),
            _ => None,
        }
    }

    /// Full-history projection, in insertion order.
    pub fn history(&self) -> &[ConversationEntry] {
        &self.log
    }

    /// Flips history visibility. Independent of the log's content.
    pub fn toggle_history(&mut self) {
        self.history_visible = !self.history_visible;
    }
}

/// Handle to one session. The per-session async lock serializes user actions:
/// an action (including its blocking completion call) finishes before the
/// next one against the same session begins.
pub type SessionHandle = Arc<tokio::sync::Mutex<Session>>;

/// Uuid-keyed store of sessions. The outer lock guards only the map and is
/// never held across an await; cross-session isolation is the keying itself.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `id`, creating and registering a default one
    /// (empty log, empty questions, history hidden) if none exists. Callers
    /// never observe a partially initialized session.
    pub fn get(&self, id: Uuid) -> SessionHandle {
        let mut sessions = self.inner.lock().expect("session map lock poisoned");
        sessions
            .entry(id)
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(Session::new(id))))
            .clone()
    }

    /// Registers a session under a fresh id.
    pub fn create(&self) -> SessionHandle {
        self.get(Uuid::new_v4())
    }
}

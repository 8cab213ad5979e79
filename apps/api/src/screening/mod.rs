//! Candidate screening: form model, prompt text, chat transitions, and the
//! HTTP handlers that tie them to the session store and dispatcher.

pub mod chat;
pub mod handlers;
pub mod models;
pub mod prompts;

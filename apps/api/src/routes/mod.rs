pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/intro", get(handlers::handle_intro))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/questions",
            post(handlers::handle_generate_questions),
        )
        .route("/api/v1/sessions/:id/chat", post(handlers::handle_chat_send))
        .route(
            "/api/v1/sessions/:id/history/toggle",
            post(handlers::handle_toggle_history),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::MockCompletionClient;
    use crate::llm_client::Dispatcher;
    use crate::session::SessionStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router(client: MockCompletionClient) -> Router {
        let state = AppState {
            sessions: SessionStore::new(),
            dispatcher: Dispatcher::new(Arc::new(client)),
        };
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_router(MockCompletionClient::new());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "talentscout-api");
    }

    #[tokio::test]
    async fn empty_tech_stack_is_rejected_with_warning() {
        let app = test_router(MockCompletionClient::new());

        let response = app
            .oneshot(post_json(
                &format!("/api/v1/sessions/{}/questions", uuid::Uuid::new_v4()),
                &serde_json::json!({ "name": "Ada", "tech_stack": "" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Please enter your tech stack before proceeding."
        );
    }

    #[tokio::test]
    async fn chat_round_trip_returns_full_snapshot() {
        let app = test_router(MockCompletionClient::new().reply("An async runtime for Rust."));

        // First visit registers the session
        let id = uuid::Uuid::new_v4();
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/sessions/{id}/chat"),
                &serde_json::json!({ "message": "What is Tokio?" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["latest_response"], "An async runtime for Rust.");
        assert_eq!(json["history_visible"], false);
        assert_eq!(json["history_label"], "Show Chat History");
        assert!(json.get("history").is_none());

        // Toggling makes the full log visible, labeled by speaker
        let response = app
            .oneshot(post_json(
                &format!("/api/v1/sessions/{id}/history/toggle"),
                &serde_json::json!({}),
            ))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["history_visible"], true);
        assert_eq!(json["history_label"], "Hide Chat History");
        let history = json["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["speaker"], "user");
        assert_eq!(history[1]["speaker"], "assistant");
    }
}

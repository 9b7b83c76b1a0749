//! Helpers for driving the router in tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::router::create_router_with_state;
use super::state::AppState;
use crate::domain::user::{User, UserId, UserRepository};
use crate::infrastructure::qr::QrcodeRenderer;
use crate::infrastructure::user::InMemoryUserRepository;

/// State backed by the given store and the real renderer
pub fn state_with_repository(repository: Arc<dyn UserRepository>) -> AppState {
    AppState::new(repository, Arc::new(QrcodeRenderer::new()), "/path/to/qr")
}

/// State with two known users: `key-admin` and `key-member`
pub fn seeded_state() -> AppState {
    state_with_repository(Arc::new(InMemoryUserRepository::with_users(vec![
        User::new(UserId::new("user-1"), "key-admin", "admin"),
        User::new(UserId::new("user-2"), "key-member", "member"),
    ])))
}

/// Send a request through the full router and decode the JSON body, if any
pub async fn send(state: AppState, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = create_router_with_state(state)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

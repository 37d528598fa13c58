//! Shared helpers for the integration tests.

use axum_test::TestServer;
use linkboard::backend::auth::tokens::TokenService;
use linkboard::backend::routes::create_router;
use linkboard::backend::server::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// Minimum bcrypt cost; `bcrypt::MIN_COST` is private in bcrypt 0.17.
const MIN_COST: u32 = 4;

/// In-memory application state with a fast hash cost.
pub fn test_state(ttl_secs: u64) -> AppState {
    AppState::in_memory(TokenService::new(TEST_SECRET, ttl_secs)).with_hash_cost(MIN_COST)
}

pub fn test_server() -> TestServer {
    test_server_with_ttl(3600)
}

pub fn test_server_with_ttl(ttl_secs: u64) -> TestServer {
    TestServer::new(create_router(test_state(ttl_secs))).unwrap()
}

/// Register a user and return the issued token.
pub async fn register(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/register")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::OK);
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

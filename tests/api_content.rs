//! Content API integration tests: posts, comments, upvotes, resolution.

mod common;

use axum::http::StatusCode;
use common::{register, test_server};
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[tokio::test]
async fn submitted_posts_carry_the_verified_author() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let response = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello", "link": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let post: serde_json::Value = response.json();
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["link"], "https://example.com");
    assert_eq!(post["author"], "alice");
    assert_eq!(post["upvotes"], 0);
}

#[tokio::test]
async fn the_author_claim_in_the_body_is_ignored() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let response = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello", "author": "mallory" }))
        .await;

    let post: serde_json::Value = response.json();
    assert_eq!(post["author"], "alice");
}

#[tokio::test]
async fn empty_titles_are_rejected() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    for body in [
        serde_json::json!({}),
        serde_json::json!({ "title": "" }),
        serde_json::json!({ "title": "   " }),
    ] {
        let response = server
            .post("/posts")
            .authorization_bearer(&token)
            .json(&body)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn listing_returns_posts_oldest_first() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    for title in ["first", "second", "third"] {
        server
            .post("/posts")
            .authorization_bearer(&token)
            .json(&serde_json::json!({ "title": title }))
            .await;
    }

    let posts: Vec<serde_json::Value> = server.get("/posts").await.json();
    let titles: Vec<&str> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn fetching_a_post_expands_its_comments() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let post: serde_json::Value = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await
        .json();
    let id = post["id"].as_str().unwrap();

    let detail: serde_json::Value = server.get(&format!("/posts/{id}")).await.json();
    assert_eq!(detail["title"], "Hello");
    assert_eq!(detail["comments"], serde_json::json!([]));

    server
        .post(&format!("/posts/{id}/comments"))
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "body": "nice link" }))
        .await;

    let detail: serde_json::Value = server.get(&format!("/posts/{id}")).await.json();
    let comments = detail["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["body"], "nice link");
    assert_eq!(comments[0]["author"], "alice");
}

#[tokio::test]
async fn upvoting_increments_by_one_per_call() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let post: serde_json::Value = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await
        .json();
    let id = post["id"].as_str().unwrap();

    let first: serde_json::Value = server
        .put(&format!("/posts/{id}/upvote"))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(first["upvotes"], 1);

    // No de-duplication by voter
    let second: serde_json::Value = server
        .put(&format!("/posts/{id}/upvote"))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(second["upvotes"], 2);
}

#[tokio::test]
async fn comments_can_be_upvoted() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let post: serde_json::Value = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await
        .json();
    let post_id = post["id"].as_str().unwrap();

    let comment: serde_json::Value = server
        .post(&format!("/posts/{post_id}/comments"))
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "body": "nice link" }))
        .await
        .json();
    let comment_id = comment["id"].as_str().unwrap();

    let upvoted: serde_json::Value = server
        .put(&format!("/posts/{post_id}/comments/{comment_id}/upvote"))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(upvoted["upvotes"], 1);
}

#[tokio::test]
async fn empty_comment_bodies_are_rejected() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let post: serde_json::Value = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await
        .json();
    let id = post["id"].as_str().unwrap();

    let response = server
        .post(&format!("/posts/{id}/comments"))
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "body": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_post_ids_resolve_to_not_found() {
    let server = test_server();

    let response = server.get(&format!("/posts/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_uuid_segments_resolve_to_not_found() {
    let server = test_server();

    let response = server.get("/posts/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_comment_ids_resolve_to_not_found() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let post: serde_json::Value = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await
        .json();
    let post_id = post["id"].as_str().unwrap();

    let response = server
        .put(&format!("/posts/{post_id}/comments/{}/upvote", Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unauthenticated_mutations_are_rejected_before_resolution() {
    let server = test_server();
    let token = register(&server, "alice", "secret123").await;

    let post: serde_json::Value = server
        .post("/posts")
        .authorization_bearer(&token)
        .json(&serde_json::json!({ "title": "Hello" }))
        .await
        .json();
    let id = post["id"].as_str().unwrap();

    let upvote = server.put(&format!("/posts/{id}/upvote")).await;
    assert_eq!(upvote.status_code(), StatusCode::UNAUTHORIZED);

    // A nonexistent target also reports 401, not 404: auth runs first
    let missing = server
        .put(&format!("/posts/{}/upvote", Uuid::new_v4()))
        .await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn errors_are_json_with_a_message_and_status() {
    let server = test_server();

    let response = server.get("/posts/not-a-uuid").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 404);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn unknown_routes_fall_back_to_a_json_404() {
    let server = test_server();

    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 404);
}

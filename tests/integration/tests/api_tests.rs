//! API Integration Tests
//!
//! Each test starts its own server on a random port in front of an
//! in-memory backend, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Utc;
use feed_core::InteractionType;
use integration_tests::{
    assert_error, assert_json, assert_status, create_post, fixtures::*, signed_in_user, TestServer,
    TEST_JWT_SECRET,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["backend"], "healthy");
}

#[tokio::test]
async fn test_health_ready_backend_down() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.backend.set_unreachable(true);

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["status"], "not_ready");

    // Liveness does not depend on the backend
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/posts").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up_creates_identity_and_profile() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = SignUpBody::unique();

    let response = server.post("/signup", &body).await.unwrap();
    let reply: SignUpReply = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(reply.identity.email.as_deref(), Some(body.email.as_str()));
    assert_eq!(reply.profile.id, reply.identity.id);
    assert_eq!(reply.profile.username, body.username);
    assert_eq!(reply.profile.email, body.email);
    assert!(server.backend.profile(&reply.identity.id).is_some());
}

#[tokio::test]
async fn test_sign_up_then_log_in() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = SignUpBody::unique();

    let response = server.post("/signup", &body).await.unwrap();
    let sign_up: SignUpReply = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/login", &LoginBody::from_sign_up(&body)).await.unwrap();
    let login: LoginReply = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!login.access_token.is_empty());
    assert_eq!(login.access_token, login.session.access_token);
    assert_eq!(login.session.token_type, "bearer");
    assert_eq!(login.identity.id, sign_up.identity.id);
    assert!(server.backend.profile(&login.identity.id).is_some());
}

#[tokio::test]
async fn test_sign_up_missing_fields_in_order() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/signup", &json!({})).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"email\" field");

    let response = server
        .post("/signup", &json!({"email": "a@example.com", "password": "secret123"}))
        .await
        .unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"username\" field");
    assert_eq!(server.backend.identity_count(), 0);
}

#[tokio::test]
async fn test_sign_up_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut body = SignUpBody::unique();
    body.email = "not-an-email".to_string();

    let response = server.post("/signup", &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = SignUpBody::unique();

    let response = server.post("/signup", &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/signup", &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.message().contains("User already registered"), "{}", err.message());
}

#[tokio::test]
async fn test_sign_up_profile_failure_leaves_identity() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.backend.set_reject_profiles(true);

    let response = server.post("/signup", &SignUpBody::unique()).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.code(), "SIGNUP_FAILED");

    // The identity is not rolled back
    assert_eq!(server.backend.identity_count(), 1);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = SignUpBody::unique();
    server.post("/signup", &body).await.unwrap();

    let login = LoginBody {
        email: body.email.clone(),
        password: "wrong-password".to_string(),
    };
    let response = server.post("/login", &login).await.unwrap();
    let err = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.code(), "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_missing_password() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/login", &json!({"email": "a@example.com"})).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"password\" field");
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_list_posts_empty() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/posts").await.unwrap();
    let posts: Vec<PostRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_list_posts_sorted_and_limited() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = server.backend.seed_post("u1", "first", 50);
    let second = server.backend.seed_post("u1", "second", 5);
    let third = server.backend.seed_post("u2", "third", 20);

    let response = server.get("/posts").await.unwrap();
    let posts: Vec<PostRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.len(), 3);

    let response = server.get("/posts?sort=newest").await.unwrap();
    let posts: Vec<PostRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![third.id.as_str(), second.id.as_str(), first.id.as_str()]);

    let response = server.get("/posts?sort=popular&limit=2").await.unwrap();
    let posts: Vec<PostRow> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), third.id.as_str()]);
    assert_eq!(posts[0].view_count, 50);
}

#[tokio::test]
async fn test_list_posts_bad_query() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/posts?sort=oldest", "/posts?limit=0", "/posts?limit=101", "/posts?limit=many"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_list_posts_backend_fault() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.backend.set_unreachable(true);

    let response = server.get("/posts").await.unwrap();
    let err = assert_error(response, StatusCode::INTERNAL_SERVER_ERROR).await.unwrap();
    assert!(err.message().contains("connection refused"), "{}", err.message());
}

#[tokio::test]
async fn test_get_author_username() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.backend.seed_profile("u1", "alice");
    let post = server.backend.seed_post("u1", "hello", 0);

    let response = server.get(&format!("/username/{}", post.id)).await.unwrap();
    let username: String = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(username, "alice");
}

#[tokio::test]
async fn test_get_author_username_unknown_post() {
    let server = TestServer::start().await.expect("Failed to start server");

    for post_id in ["424242", "not-a-number"] {
        let response = server.get(&format!("/username/{post_id}")).await.unwrap();
        let err = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(err.message(), format!("Post not found: {post_id}"));
    }
}

#[tokio::test]
async fn test_post_stats() {
    let server = TestServer::start().await.expect("Failed to start server");
    let post = server.backend.seed_post("u1", "counted", 0);
    server.backend.seed_interaction("u1", &post.id, InteractionType::Like);
    server.backend.seed_interaction("u2", &post.id, InteractionType::Like);
    server.backend.seed_interaction("u2", &post.id, InteractionType::Save);

    let response = server.get(&format!("/posts/{}/stats", post.id)).await.unwrap();
    let stats: StatsReply = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.post_id, post.id);
    assert_eq!(stats.likes, 2);
    assert_eq!(stats.saves, 1);

    let response = server.get("/posts/999999/stats").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_post_without_bearer_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/posts", &NewPostBody::unique()).await.unwrap();
    let err = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.code(), "MISSING_AUTHORIZATION");

    // Body problems are not reported before authentication
    let response = server.post("/posts", &json!({})).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_with_header("/posts", "Basic dXNlcjpwYXNz", &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_post_with_unknown_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_auth("/posts", "token-that-was-never-issued", &NewPostBody::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let body = NewPostBody::unique();

    let response = server.post_auth("/posts", &user.token, &body).await.unwrap();
    let rows: Vec<PostRow> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, user.id);
    assert_eq!(rows[0].title, body.title);
    assert_eq!(rows[0].article_url, body.article_url);
    assert!(!rows[0].created_at.is_empty());
    assert!(server.backend.post(&rows[0].id).is_some());
}

#[tokio::test]
async fn test_create_post_ignores_body_owner() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    let body = json!({
        "title": "Mine",
        "content": "text",
        "article_url": "https://example.com/a",
        "user_id": "someone-else",
    });
    let response = server.post_auth("/posts", &user.token, &body).await.unwrap();
    let rows: Vec<PostRow> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(rows[0].user_id, user.id);
}

#[tokio::test]
async fn test_create_post_missing_fields_in_order() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    let cases = [
        (json!({}), "title"),
        (json!({"title": "T"}), "content"),
        (json!({"title": "T", "content": "C"}), "article_url"),
    ];
    for (body, field) in cases {
        let response = server.post_auth("/posts", &user.token, &body).await.unwrap();
        let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(err.message(), format!("Missing required \"{field}\" field"));
    }
}

#[tokio::test]
async fn test_missing_field_reported_before_malformed_one() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    let response = server
        .post_auth("/posts", &user.token, &json!({"article_url": "x"}))
        .await
        .unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"title\" field");

    let response = server.post("/signup", &json!({"email": "not-an-email"})).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"password\" field");
}

#[tokio::test]
async fn test_create_post_invalid_url_and_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    let body = json!({"title": "T", "content": "C", "article_url": "not a url"});
    let response = server.post_auth("/posts", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.code(), "VALIDATION_ERROR");

    let response = server.post_raw_auth("/posts", &user.token, "{not json").await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.code(), "INVALID_BODY");
}

#[tokio::test]
async fn test_update_post_title() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &user).await.unwrap();

    let response = server
        .put_auth(&format!("/posts/{}?updated_title=Renamed%20article", post.id), &user.token)
        .await
        .unwrap();
    let rows: Vec<PostRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows[0].title, "Renamed article");
    assert_eq!(server.backend.post(&post.id).unwrap().title, "Renamed article");
}

#[tokio::test]
async fn test_update_post_title_missing_query() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &user).await.unwrap();

    let response = server.put_auth(&format!("/posts/{}", post.id), &user.token).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"updated_title\" field");
}

#[tokio::test]
async fn test_update_post_requires_auth() {
    let server = TestServer::start().await.expect("Failed to start server");
    let post = server.backend.seed_post("u1", "locked", 0);

    let response = server.put(&format!("/posts/{}?updated_title=x", post.id)).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_foreign_post_looks_missing() {
    let server = TestServer::start().await.expect("Failed to start server");
    let owner = signed_in_user(&server).await.unwrap();
    let intruder = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &owner).await.unwrap();

    let response = server
        .put_auth(&format!("/posts/{}?updated_title=Hijacked", post.id), &intruder.token)
        .await
        .unwrap();
    let foreign = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put_auth("/posts/999999?updated_title=Hijacked", &intruder.token)
        .await
        .unwrap();
    let missing = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(foreign.message(), missing.message());
    assert_eq!(foreign.message(), "Post not found or unauthorized");

    let response = server.delete_auth(&format!("/posts/{}", post.id), &intruder.token).await.unwrap();
    let foreign = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(foreign.message(), missing.message());

    assert_eq!(server.backend.post(&post.id).unwrap().title, post.title);
}

#[tokio::test]
async fn test_delete_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let post = create_post(&server, &user).await.unwrap();

    let response = server.delete(&format!("/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.delete_auth(&format!("/posts/{}", post.id), &user.token).await.unwrap();
    let rows: Vec<PostRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows[0].id, post.id);
    assert!(server.backend.post(&post.id).is_none());

    let response = server.delete_auth(&format!("/posts/{}", post.id), &user.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_create_interaction_then_duplicate() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let post = server.backend.seed_post("author", "likeable", 0);
    let body = interaction_body(&user.id, &post.id, "like");

    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let rows: Vec<InteractionRow> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(rows[0].user_id, user.id);
    assert_eq!(rows[0].post_id, post.id);
    assert_eq!(rows[0].interaction_type, "like");

    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Interaction already exists");
    assert_eq!(server.backend.interaction_count(), 1);

    // A different type on the same post is a separate interaction
    let save = interaction_body(&user.id, &post.id, "save");
    let response = server.post_auth("/interactions", &user.token, &save).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_create_interaction_accepts_profile_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let post = server.backend.seed_post("author", "saveable", 0);

    let body = json!({"profile_id": user.id, "post_id": post.id, "interaction_type": "save"});
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_create_interaction_with_both_ids_uses_profile_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let post = server.backend.seed_post("author", "shared", 0);

    let body = json!({
        "profile_id": user.id,
        "user_id": "someone-else",
        "post_id": post.id,
        "interaction_type": "like",
    });
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let rows: Vec<InteractionRow> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(rows[0].user_id, user.id);
}

#[tokio::test]
async fn test_create_interaction_missing_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    let body = interaction_body(&user.id, "777777", "like");
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Post not found: 777777");
}

#[tokio::test]
async fn test_create_interaction_post_checked_before_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    let body = interaction_body("no-such-user", "777777", "like");
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.message().starts_with("Post not found"), "{}", err.message());
}

#[tokio::test]
async fn test_create_interaction_missing_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let post = server.backend.seed_post("author", "orphaned", 0);

    let body = interaction_body("no-such-user", &post.id, "like");
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "User not found: no-such-user");
}

#[tokio::test]
async fn test_create_interaction_invalid_type_wins() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    // Neither post nor user exists; the type is still what gets reported
    let body = interaction_body("no-such-user", "777777", "share");
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(err.message().contains("Invalid interaction type"), "{}", err.message());
    assert!(err.message().contains("share"));
}

#[tokio::test]
async fn test_create_interaction_missing_fields() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();

    let response = server.post_auth("/interactions", &user.token, &json!({})).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"profile_id\" field");

    let body = json!({"user_id": user.id, "post_id": "1"});
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.message(), "Missing required \"interaction_type\" field");
}

#[tokio::test]
async fn test_create_interaction_for_someone_else_is_refused() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let other = signed_in_user(&server).await.unwrap();
    let post = server.backend.seed_post("author", "contested", 0);

    let body = interaction_body(&other.id, &post.id, "like");
    let response = server.post_auth("/interactions", &user.token, &body).await.unwrap();
    let err = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.code(), "POLICY_VIOLATION");
    assert_eq!(server.backend.interaction_count(), 0);
}

#[tokio::test]
async fn test_create_interaction_requires_auth() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/interactions", &interaction_body("u1", "1", "like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_list_post_interactions() {
    let server = TestServer::start().await.expect("Failed to start server");
    let post = server.backend.seed_post("author", "popular", 0);
    server.backend.seed_interaction("u1", &post.id, InteractionType::Like);
    server.backend.seed_interaction("u2", &post.id, InteractionType::Save);

    let response = server.get(&format!("/interactions/{}", post.id)).await.unwrap();
    let rows: Vec<InteractionRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.post_id == post.id));

    let quiet = server.backend.seed_post("author", "quiet", 0);
    let response = server.get(&format!("/interactions/{}", quiet.id)).await.unwrap();
    let err = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.code(), "NO_INTERACTIONS");
}

#[tokio::test]
async fn test_delete_interaction() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = signed_in_user(&server).await.unwrap();
    let other = signed_in_user(&server).await.unwrap();
    let post = server.backend.seed_post("author", "liked", 0);
    let mine = server.backend.seed_interaction(&user.id, &post.id, InteractionType::Like);
    let theirs = server.backend.seed_interaction(&other.id, &post.id, InteractionType::Like);

    let response = server.delete(&format!("/interactions/{}", mine.id)).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .delete_auth(&format!("/interactions/{}", theirs.id), &user.token)
        .await
        .unwrap();
    let err = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.message(), "Interaction not found or unauthorized");

    let response = server
        .delete_auth(&format!("/interactions/{}", mine.id), &user.token)
        .await
        .unwrap();
    let rows: Vec<InteractionRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows[0].id, mine.id);
    assert_eq!(server.backend.interaction_count(), 1);
}

// ============================================================================
// Local Token Verification Tests
// ============================================================================

#[derive(serde::Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    aud: &'a str,
    exp: i64,
    role: &'a str,
}

fn mint_token(secret: &str, sub: &str, exp_offset: i64) -> String {
    let claims = TestClaims {
        sub,
        aud: "authenticated",
        exp: Utc::now().timestamp() + exp_offset,
        role: "authenticated",
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

#[tokio::test]
async fn test_locally_verified_token() {
    let server = TestServer::start_with_local_verification()
        .await
        .expect("Failed to start server");
    let token = mint_token(TEST_JWT_SECRET, "local-user", 3600);

    let response = server.post_auth("/posts", &token, &NewPostBody::unique()).await.unwrap();
    let rows: Vec<PostRow> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(rows[0].user_id, "local-user");
}

#[tokio::test]
async fn test_locally_rejected_tokens() {
    let server = TestServer::start_with_local_verification()
        .await
        .expect("Failed to start server");

    let expired = mint_token(TEST_JWT_SECRET, "local-user", -3600);
    let response = server.post_auth("/posts", &expired, &NewPostBody::unique()).await.unwrap();
    let err = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(err.code(), "TOKEN_EXPIRED");

    let forged = mint_token("some-other-secret-value", "local-user", 3600);
    let response = server.post_auth("/posts", &forged, &NewPostBody::unique()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Rate Limit Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_applies_to_api_not_health() {
    let server = TestServer::start_with_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "2"),
    ])
    .await
    .expect("Failed to start server");

    let mut statuses = Vec::new();
    for _ in 0..5 {
        statuses.push(server.get("/posts").await.unwrap().status());
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS), "{statuses:?}");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_rate_limit_replenishes_within_a_second() {
    let server = TestServer::start_with_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "20"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .await
    .expect("Failed to start server");

    let response = server.get("/posts").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // 20 per second returns a request to the bucket every 50ms
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;

    let response = server.get("/posts").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_rate_limit_rejection_uses_error_envelope() {
    let server = TestServer::start_with_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .await
    .expect("Failed to start server");

    let response = server.get("/posts").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/posts").await.unwrap();
    assert!(response.headers().contains_key("retry-after"));
    let err = assert_error(response, StatusCode::TOO_MANY_REQUESTS).await.unwrap();
    assert_eq!(err.code(), "RATE_LIMIT_EXCEEDED");
    assert!(err.message().starts_with("Rate limit exceeded"), "{}", err.message());
}

// ============================================================================
// Timeout Tests
// ============================================================================

#[tokio::test]
async fn test_request_timeout_uses_error_envelope() {
    let server = TestServer::start_with_config(&[("REQUEST_TIMEOUT_SECS", "1")])
        .await
        .expect("Failed to start server");
    server.backend.set_list_delay(std::time::Duration::from_secs(3));

    let response = server.get("/posts").await.unwrap();
    let err = assert_error(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(err.code(), "REQUEST_TIMEOUT");
    assert_eq!(err.message(), "Request timed out");
}

//! Interaction validator and existence-check tests
//!
//! Run against the service layer directly, without HTTP.
//!
//! Run with: cargo test -p integration-tests --test validator_tests

use feed_core::{Caller, InteractionKey, InteractionType};
use feed_service::dto::CreateInteractionRequest;
use feed_service::{InteractionService, InteractionValidator, LookupService, Verdict};
use integration_tests::InMemoryBackend;

fn request(profile_id: Option<&str>, post_id: Option<&str>, interaction_type: Option<&str>) -> CreateInteractionRequest {
    CreateInteractionRequest {
        profile_id: profile_id.map(String::from),
        user_id: None,
        post_id: post_id.map(String::from),
        interaction_type: interaction_type.map(String::from),
    }
}

async fn check(backend: &InMemoryBackend, request: &CreateInteractionRequest) -> Verdict {
    let ctx = backend.service_context();
    InteractionValidator::new(&ctx)
        .validate(request)
        .await
        .expect("validation should not fail")
}

#[tokio::test]
async fn test_accepts_valid_request() {
    let backend = InMemoryBackend::new();
    backend.seed_profile("u1", "alice");
    let post = backend.seed_post("u2", "article", 0);

    let verdict = check(&backend, &request(Some("u1"), Some(&post.id), Some("save"))).await;
    assert_eq!(
        verdict,
        Verdict::Accepted(InteractionKey::new("u1", &post.id, InteractionType::Save))
    );
}

#[tokio::test]
async fn test_missing_fields_reported_first() {
    let backend = InMemoryBackend::new();

    let verdict = check(&backend, &request(None, Some("1"), Some("bogus"))).await;
    assert_eq!(verdict.reason(), Some("Missing required \"profile_id\" field"));

    let verdict = check(&backend, &request(Some("u1"), None, Some("bogus"))).await;
    assert_eq!(verdict.reason(), Some("Missing required \"post_id\" field"));
}

#[tokio::test]
async fn test_invalid_type_before_existence_checks() {
    let backend = InMemoryBackend::new();

    for bad in ["share", "Like", ""] {
        let verdict = check(&backend, &request(Some("ghost"), Some("404"), Some(bad))).await;
        let reason = verdict.reason().expect("rejected");
        assert!(reason.starts_with("Invalid interaction type"), "{reason}");
    }
}

#[tokio::test]
async fn test_post_checked_before_user() {
    let backend = InMemoryBackend::new();

    let verdict = check(&backend, &request(Some("ghost"), Some("404"), Some("like"))).await;
    assert_eq!(verdict.reason(), Some("Post not found: 404"));

    let post = backend.seed_post("u2", "article", 0);
    let verdict = check(&backend, &request(Some("ghost"), Some(&post.id), Some("like"))).await;
    assert_eq!(verdict.reason(), Some("User not found: ghost"));
}

#[tokio::test]
async fn test_existing_interaction_rejected() {
    let backend = InMemoryBackend::new();
    backend.seed_profile("u1", "alice");
    let post = backend.seed_post("u2", "article", 0);
    backend.seed_interaction("u1", &post.id, InteractionType::Like);

    let verdict = check(&backend, &request(Some("u1"), Some(&post.id), Some("like"))).await;
    assert_eq!(verdict.reason(), Some("Interaction already exists"));

    let verdict = check(&backend, &request(Some("u1"), Some(&post.id), Some("save"))).await;
    assert!(matches!(verdict, Verdict::Accepted(_)));
}

#[tokio::test]
async fn test_backend_fault_is_an_error() {
    let backend = InMemoryBackend::new();
    backend.set_unreachable(true);
    let ctx = backend.service_context();

    let result = InteractionValidator::new(&ctx)
        .validate(&request(Some("u1"), Some("1"), Some("like")))
        .await;
    let err = result.expect_err("backend fault must propagate");
    assert!(err.is_server_error());

    // Field and type checks never reach the backend
    let verdict = InteractionValidator::new(&ctx)
        .validate(&request(Some("u1"), Some("1"), Some("share")))
        .await
        .unwrap();
    assert!(verdict.reason().is_some());
}

#[tokio::test]
async fn test_lookups() {
    let backend = InMemoryBackend::new();
    backend.seed_profile("u1", "alice");
    let post = backend.seed_post("u1", "article", 0);
    let ctx = backend.service_context();
    let lookups = LookupService::new(&ctx);

    assert_eq!(lookups.post_exists(&post.id).await.unwrap().found(), Some(post.clone()));
    assert_eq!(
        lookups.post_exists("missing").await.unwrap().reason(),
        Some("Post not found: missing")
    );
    assert!(lookups.user_exists("u1").await.unwrap().is_found());
    assert_eq!(
        lookups.user_exists("nobody").await.unwrap().reason(),
        Some("User not found: nobody")
    );

    let key = InteractionKey::new("u1", &post.id, InteractionType::Like);
    assert!(!lookups.interaction_exists(&key).await.unwrap().is_found());
    backend.seed_interaction("u1", &post.id, InteractionType::Like);
    assert!(lookups.interaction_exists(&key).await.unwrap().is_found());
}

#[tokio::test]
async fn test_concurrent_duplicates_insert_once() {
    let backend = InMemoryBackend::new();
    backend.seed_profile("u1", "alice");
    let post = backend.seed_post("u2", "article", 0);
    let ctx = std::sync::Arc::new(backend.service_context());
    let caller = Caller::new("u1", "token");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ctx = ctx.clone();
        let caller = caller.clone();
        let post_id = post.id.clone();
        handles.push(tokio::spawn(async move {
            InteractionService::new(&ctx)
                .create(&caller, request(Some("u1"), Some(&post_id), Some("like")))
                .await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert_eq!(e.to_string(), "Interaction already exists"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(backend.interaction_count(), 1);
}

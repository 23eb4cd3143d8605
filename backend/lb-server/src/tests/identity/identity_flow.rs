use super::fakes::{CountingHasher, FailingHasher, FakeUserStore, PlainHasher};

use crate::{IdentityError, IdentityFlow};

use std::sync::Arc;

use googletest::prelude::*;

fn flow_with(store: Arc<FakeUserStore>) -> IdentityFlow {
    IdentityFlow::new(store, Arc::new(PlainHasher))
}

fn flow() -> (IdentityFlow, Arc<FakeUserStore>) {
    let store = Arc::new(FakeUserStore::default());
    (flow_with(store.clone()), store)
}

// =========================================================================
// register
// =========================================================================

#[tokio::test]
async fn given_new_user_when_register_then_returns_identifier() {
    // Given
    let (flow, store) = flow();

    // When
    let identifier = flow
        .register("alice", "a@x.com", "secret123")
        .await
        .unwrap();

    // Then
    assert_that!(identifier.username, eq("alice"));
    assert_that!(identifier.id, gt(0_i64));
    let stored = store.stored();
    assert_that!(stored.len(), eq(1));
    assert_that!(stored[0].password, eq("plain:secret123"));
}

#[tokio::test]
async fn given_taken_username_when_register_then_conflict_names_username() {
    // Given
    let (flow, _store) = flow();
    flow.register("alice", "a@x.com", "secret123").await.unwrap();

    // When
    let result = flow.register("alice", "b@x.com", "secret123").await;

    // Then
    match result {
        Err(IdentityError::Conflict { reason, field, .. }) => {
            assert_that!(field, eq("username"));
            assert_that!(reason, contains_substring("username"));
        }
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn given_taken_email_when_register_then_conflict_names_email() {
    let (flow, store) = flow();
    flow.register("alice", "a@x.com", "secret123").await.unwrap();

    let result = flow.register("bob", "a@x.com", "secret123").await;

    assert!(matches!(
        result,
        Err(IdentityError::Conflict { ref field, .. }) if field == "email"
    ));
    assert_that!(store.stored().len(), eq(1));
}

#[tokio::test]
async fn given_broken_store_when_register_then_internal() {
    let flow = flow_with(Arc::new(FakeUserStore::broken()));

    let result = flow.register("alice", "a@x.com", "secret123").await;

    assert!(matches!(result, Err(IdentityError::Internal { .. })));
}

#[tokio::test]
async fn given_failing_hasher_when_register_then_internal_and_nothing_stored() {
    let store = Arc::new(FakeUserStore::default());
    let flow = IdentityFlow::new(store.clone(), Arc::new(FailingHasher));

    let result = flow.register("alice", "a@x.com", "secret123").await;

    assert!(matches!(result, Err(IdentityError::Internal { .. })));
    assert_that!(store.stored().len(), eq(0));
}

// =========================================================================
// user
// =========================================================================

#[tokio::test]
async fn given_registered_user_when_user_then_returns_identifier() {
    let (flow, _store) = flow();
    let created = flow.register("alice", "a@x.com", "secret123").await.unwrap();

    let found = flow.user(created.id).await.unwrap();

    assert_that!(found, eq(&created));
}

#[tokio::test]
async fn given_unknown_id_when_user_then_not_found_with_id() {
    let (flow, _store) = flow();

    let result = flow.user(99).await;

    assert!(matches!(result, Err(IdentityError::NotFound { id: 99, .. })));
}

#[tokio::test]
async fn given_broken_store_when_user_then_internal() {
    let flow = flow_with(Arc::new(FakeUserStore::broken()));

    let result = flow.user(1).await;

    assert!(matches!(result, Err(IdentityError::Internal { .. })));
}

// =========================================================================
// me
// =========================================================================

#[tokio::test]
async fn given_authenticated_id_when_me_then_returns_personal() {
    let (flow, _store) = flow();
    let created = flow.register("alice", "a@x.com", "secret123").await.unwrap();

    let personal = flow.me(Some(created.id)).await.unwrap();

    assert_that!(personal.id, eq(created.id));
    assert_that!(personal.username, eq("alice"));
    assert_that!(personal.email, eq("a@x.com"));
}

#[tokio::test]
async fn given_authenticated_id_without_row_when_me_then_internal_not_not_found() {
    let (flow, _store) = flow();

    let result = flow.me(Some(12345)).await;

    assert!(matches!(result, Err(IdentityError::Internal { .. })));
}

#[tokio::test]
async fn given_no_authenticated_id_when_me_then_internal() {
    let (flow, _store) = flow();

    let result = flow.me(None).await;

    assert!(matches!(result, Err(IdentityError::Internal { .. })));
}

// =========================================================================
// login
// =========================================================================

#[tokio::test]
async fn given_correct_password_when_login_then_returns_user() {
    let (flow, _store) = flow();
    let created = flow.register("alice", "a@x.com", "secret123").await.unwrap();

    let user = flow.login("a@x.com", "secret123").await.unwrap();

    assert_that!(user.id, eq(created.id));
    assert_that!(user.email, eq("a@x.com"));
}

#[tokio::test]
async fn given_wrong_password_when_login_then_invalid_credentials() {
    let (flow, _store) = flow();
    flow.register("alice", "a@x.com", "secret123").await.unwrap();

    let result = flow.login("a@x.com", "secret999").await;

    assert!(matches!(result, Err(IdentityError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn given_unknown_email_when_login_then_invalid_credentials() {
    let (flow, _store) = flow();

    let result = flow.login("nobody@x.com", "secret123").await;

    assert!(matches!(result, Err(IdentityError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn given_broken_store_when_login_then_internal() {
    let flow = flow_with(Arc::new(FakeUserStore::broken()));

    let result = flow.login("a@x.com", "secret123").await;

    assert!(matches!(result, Err(IdentityError::Internal { .. })));
}

#[tokio::test]
async fn given_unknown_email_when_login_then_password_is_still_verified() {
    // Given
    let hasher = Arc::new(CountingHasher::default());
    let flow = IdentityFlow::new(Arc::new(FakeUserStore::default()), hasher.clone());

    // When
    let result = flow.login("nobody@x.com", "secret123").await;

    // Then: same verification work as a wrong password
    assert!(matches!(result, Err(IdentityError::InvalidCredentials { .. })));
    assert_that!(hasher.verify_calls(), eq(1));
}

#[tokio::test]
async fn given_wrong_password_and_unknown_email_then_verification_work_matches() {
    let hasher = Arc::new(CountingHasher::default());
    let flow = IdentityFlow::new(Arc::new(FakeUserStore::default()), hasher.clone());
    flow.register("alice", "a@x.com", "secret123").await.unwrap();

    flow.login("a@x.com", "secret999").await.unwrap_err();
    let after_wrong_password = hasher.verify_calls();
    flow.login("nobody@x.com", "secret999").await.unwrap_err();
    let after_unknown_email = hasher.verify_calls();

    assert_that!(after_wrong_password, eq(1));
    assert_that!(after_unknown_email - after_wrong_password, eq(1));
}

#[tokio::test]
async fn given_flow_when_constructed_then_placeholder_hashed_once() {
    let hasher = Arc::new(CountingHasher::default());
    let flow = IdentityFlow::new(Arc::new(FakeUserStore::default()), hasher.clone());
    assert_that!(hasher.hash_calls(), eq(1));

    flow.login("nobody@x.com", "secret123").await.unwrap_err();
    flow.login("other@x.com", "secret123").await.unwrap_err();

    assert_that!(hasher.hash_calls(), eq(1));
}

#[tokio::test]
async fn given_failing_hasher_when_login_for_unknown_email_then_internal() {
    let flow = IdentityFlow::new(Arc::new(FakeUserStore::default()), Arc::new(FailingHasher));

    let result = flow.login("nobody@x.com", "secret123").await;

    assert!(matches!(result, Err(IdentityError::Internal { .. })));
}

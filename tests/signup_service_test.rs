//! Sign-up service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use local_account::errors::AppError;
use local_account::infra::{CredentialStore, InMemoryStore, MockCredentialStore};
use local_account::nav::{MockRouter, Route};
use local_account::services::{SignUpFlow, SignUpService};

#[test]
fn test_sign_up_fresh_store_writes_and_navigates_once() {
    let mut store = MockCredentialStore::new();
    store.expect_user_email().times(1).returning(|| None);
    store.expect_user_password().times(1).returning(|| None);
    store
        .expect_set_user_email()
        .with(eq("a@b.com".to_string()))
        .times(1)
        .returning(|_| ());
    store
        .expect_set_user_password()
        .with(eq("pass".to_string()))
        .times(1)
        .returning(|_| ());

    let mut router = MockRouter::new();
    router
        .expect_navigate_replacing()
        .with(eq(Route::Home), eq(Route::Auth))
        .times(1)
        .returning(|_, _| ());

    let flow = SignUpFlow::new(Arc::new(store), Arc::new(router));
    let result = flow.sign_up("a@b.com".to_string(), "pass".to_string());

    assert!(result.is_ok());
}

#[test]
fn test_sign_up_existing_user_makes_no_writes_or_navigation() {
    let mut store = MockCredentialStore::new();
    store
        .expect_user_email()
        .returning(|| Some("old@b.com".to_string()));
    store
        .expect_user_password()
        .returning(|| Some("oldpass".to_string()));
    store.expect_set_user_email().times(0);
    store.expect_set_user_password().times(0);

    let mut router = MockRouter::new();
    router.expect_navigate_replacing().times(0);

    let flow = SignUpFlow::new(Arc::new(store), Arc::new(router));
    let result = flow.sign_up("new@b.com".to_string(), "word".to_string());

    assert!(matches!(result.unwrap_err(), AppError::UserAlreadyExists));
}

// A record with only the email present is not a registered user, so
// sign-up proceeds and completes it.
#[test]
fn test_sign_up_partial_record_does_not_block_registration() {
    let mut store = MockCredentialStore::new();
    store
        .expect_user_email()
        .returning(|| Some("half@b.com".to_string()));
    store.expect_user_password().returning(|| None);
    store
        .expect_set_user_email()
        .with(eq("a@b.com".to_string()))
        .times(1)
        .returning(|_| ());
    store
        .expect_set_user_password()
        .with(eq("pass".to_string()))
        .times(1)
        .returning(|_| ());

    let mut router = MockRouter::new();
    router.expect_navigate_replacing().times(1).returning(|_, _| ());

    let flow = SignUpFlow::new(Arc::new(store), Arc::new(router));
    let result = flow.sign_up("a@b.com".to_string(), "pass".to_string());

    assert!(result.is_ok());
}

#[test]
fn test_second_sign_up_does_not_overwrite_first_user() {
    let store = Arc::new(InMemoryStore::new());
    let mut router = MockRouter::new();
    router.expect_navigate_replacing().times(1).returning(|_, _| ());

    let flow = SignUpFlow::new(store.clone(), Arc::new(router));
    assert!(flow
        .sign_up("first@b.com".to_string(), "pass".to_string())
        .is_ok());

    let result = flow.sign_up("second@b.com".to_string(), "word".to_string());

    assert!(matches!(result.unwrap_err(), AppError::UserAlreadyExists));
    assert_eq!(store.user_email().as_deref(), Some("first@b.com"));
    assert_eq!(store.user_password().as_deref(), Some("pass"));
}

#[test]
fn test_cancel_only_goes_back() {
    // No expectations on the store: any access would fail the test
    let store = MockCredentialStore::new();

    let mut router = MockRouter::new();
    router.expect_go_back().times(1).returning(|| ());

    let flow = SignUpFlow::new(Arc::new(store), Arc::new(router));
    flow.cancel();
}

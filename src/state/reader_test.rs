use std::sync::Arc;

use super::*;
use crate::net::types::UserProfile;
use crate::persist::MemoryTokenStore;
use crate::state::store::{Command, Store};

fn spawn_store() -> Store {
    Store::spawn(AuthState::new(), Arc::new(MemoryTokenStore::new()))
}

fn profile() -> UserProfile {
    UserProfile {
        id: 3,
        first_name: "Nat".into(),
        last_name: "Romanoff".into(),
        email: "nat@shield.org".into(),
    }
}

// =============================================================================
// session accessors
// =============================================================================

#[tokio::test]
async fn starts_signed_out() {
    let reader = spawn_store().reader();
    assert!(!reader.authenticated());
    assert_eq!(reader.token(), None);
    assert_eq!(reader.auth_status(), Status::Idle);
    assert_eq!(reader.auth_error(), None);
}

#[tokio::test]
async fn sees_credentials_after_dispatch() {
    let store = spawn_store();
    let reader = store.reader();
    store.dispatch(Command::SetCredentials { token: "tok".into() }).await.unwrap();

    assert!(reader.authenticated());
    assert_eq!(reader.token().as_deref(), Some("tok"));
    assert_eq!(reader.auth_status(), Status::Succeeded);
}

#[tokio::test]
async fn sees_the_login_error() {
    let store = spawn_store();
    let reader = store.reader();
    store.dispatch(Command::LoginFailed { message: "bad creds".into() }).await.unwrap();

    assert_eq!(reader.auth_error().as_deref(), Some("bad creds"));
    assert_eq!(reader.auth_status(), Status::Failed);
}

// =============================================================================
// profile accessors
// =============================================================================

#[tokio::test]
async fn profile_fields_are_absent_until_cached() {
    let reader = spawn_store().reader();
    assert_eq!(reader.profile(), None);
    assert_eq!(reader.user_id(), None);
    assert_eq!(reader.first_name(), None);
    assert_eq!(reader.last_name(), None);
    assert_eq!(reader.email(), None);
}

#[tokio::test]
async fn profile_fields_reflect_the_cache() {
    let store = Store::spawn(AuthState::restored("tok".into()), Arc::new(MemoryTokenStore::new()));
    let reader = store.reader();
    store
        .dispatch(Command::SetUser { profile: profile(), session: "tok".into() })
        .await
        .unwrap();

    assert_eq!(reader.user_id(), Some(3));
    assert_eq!(reader.first_name().as_deref(), Some("Nat"));
    assert_eq!(reader.last_name().as_deref(), Some("Romanoff"));
    assert_eq!(reader.email().as_deref(), Some("nat@shield.org"));
}

// =============================================================================
// changed
// =============================================================================

#[tokio::test]
async fn changed_resolves_after_a_publication() {
    let store = spawn_store();
    let mut reader = store.reader();
    store.dispatch(Command::SetCredentials { token: "tok".into() }).await.unwrap();

    reader.changed().await.unwrap();
    assert_eq!(reader.token().as_deref(), Some("tok"));
}

#[tokio::test]
async fn changed_reports_a_closed_store() {
    let store = spawn_store();
    let mut reader = store.reader();
    drop(store);

    assert!(matches!(reader.changed().await, Err(Error::StoreClosed)));
}

#[tokio::test]
async fn readers_are_independent_clones() {
    let store = spawn_store();
    let reader = store.reader();
    let clone = reader.clone();
    store.dispatch(Command::SetCredentials { token: "tok".into() }).await.unwrap();

    assert!(reader.authenticated());
    assert!(clone.authenticated());
}

use std::sync::Arc;

use super::*;
use crate::persist::MemoryTokenStore;
use crate::state::auth::Status;
use crate::state::user::UserState;

fn client_over(tokens: Arc<dyn TokenStore>) -> TellerClient {
    TellerClient::new(Config::default(), tokens).unwrap()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[tokio::test]
async fn starts_signed_out_with_empty_token_store() {
    let client = client_over(Arc::new(MemoryTokenStore::new()));

    let auth = client.auth();
    assert!(!auth.is_authenticated);
    assert_eq!(auth.token, None);
    assert_eq!(auth.status, Status::Idle);
}

#[tokio::test]
async fn restores_session_from_persisted_token() {
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.save("remembered-token").unwrap();

    let client = client_over(tokens);

    let auth = client.auth();
    assert!(auth.is_authenticated);
    assert_eq!(auth.token.as_deref(), Some("remembered-token"));
    assert_eq!(auth.status, Status::Idle);
    assert_eq!(auth.error, None);
}

#[tokio::test]
async fn unreadable_token_store_starts_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.json");
    std::fs::write(&path, "not json").unwrap();

    let client = client_over(Arc::new(FileTokenStore::new(path)));

    assert!(!client.auth().is_authenticated);
}

// ============================================================================
// SESSION LIFECYCLE
// ============================================================================

#[tokio::test]
async fn logout_resets_session_and_forgets_token() {
    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.save("remembered-token").unwrap();
    let client = client_over(tokens.clone());
    assert!(client.auth().is_authenticated);

    client.logout().await.unwrap();

    let auth = client.auth();
    assert!(!auth.is_authenticated);
    assert_eq!(auth.token, None);
    assert_eq!(tokens.load().unwrap(), None);
    assert_eq!(client.store.user(), UserState::new());
}

#[tokio::test]
async fn initialize_auth_without_session_is_a_no_op() {
    let client = client_over(Arc::new(MemoryTokenStore::new()));

    client.initialize_auth().await;

    assert_eq!(client.store.user(), UserState::new());
    assert!(!client.auth().is_authenticated);
}

#[tokio::test]
async fn clones_share_the_same_session() {
    let client = client_over(Arc::new(MemoryTokenStore::new()));
    let twin = client.clone();

    client
        .store
        .dispatch(Command::SetCredentials { token: "shared".into() })
        .await
        .unwrap();

    assert_eq!(twin.auth().token.as_deref(), Some("shared"));
}

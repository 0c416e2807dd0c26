use super::*;
use crate::config::ClientConfig;
use crate::request::MockHttpClient;
use crate::storage::{MemoryStorage, StorageScopes};
use crate::token::encode_test_token;
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

const BASE: &str = "http://backend.test";

fn remote_api() -> Rc<NationPostApi<MockHttpClient>> {
    Rc::new(NationPostApi::new(
        ClientConfig::new(BASE, "https://gw.test/ipfs/"),
        MockHttpClient::new(),
    ))
}

fn sample_session() -> Session {
    Session {
        id: "abc".to_string(),
        email: "jane.doe@example.com".to_string(),
        name: "Jane Doe".to_string(),
        avatar: Some("https://example.com/a.png".to_string()),
        role: Role::Moderator,
        join_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        verified: true,
    }
}

// =========================================================
// 显示名
// =========================================================

#[test]
fn display_name_capitalizes_local_part() {
    assert_eq!(display_name_from_email("user@test.com"), "User");
    assert_eq!(display_name_from_email("john.doe@x.io"), "John Doe");
    assert_eq!(display_name_from_email("mary_ann.smith@x.io"), "Mary Ann Smith");
    assert_eq!(display_name_from_email("no-at-sign"), "No-At-Sign");
}

// =========================================================
// 模拟登录
// =========================================================

#[tokio::test]
async fn simulated_login_authenticates_and_persists() {
    let mut store = SessionStore::load(MemoryStorage::new());
    assert!(!store.is_authenticated());

    let session = store
        .login(&SimulatedAuth, "user@test.com", "abc123")
        .await
        .unwrap();
    assert_eq!(session.name, "User");
    assert_eq!(session.email, "user@test.com");
    assert!(session.verified);

    assert!(store.is_authenticated());
    assert!(store.storage().get(STORAGE_SESSION_KEY).is_some());
}

#[tokio::test]
async fn simulated_login_rejects_short_password() {
    let mut store = SessionStore::load(MemoryStorage::new());

    let err = store
        .login(&SimulatedAuth, "user@test.com", "abc")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::InvalidCredentials);
    assert!(!store.is_authenticated());
    assert!(store.storage().get(STORAGE_SESSION_KEY).is_none());
}

#[tokio::test]
async fn simulated_login_rejects_empty_email() {
    let mut store = SessionStore::load(MemoryStorage::new());
    let err = store.login(&SimulatedAuth, "", "abcdef").await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::InvalidCredentials);
}

// =========================================================
// 模拟注册
// =========================================================

#[tokio::test]
async fn simulated_signup_creates_unverified_member() {
    let mut store = SessionStore::load(MemoryStorage::new());
    let session = store
        .signup(&SimulatedAuth, "new@test.com", "secret1", "  New Person ")
        .await
        .unwrap()
        .clone();

    assert_eq!(session.name, "New Person");
    assert!(!session.verified);
    assert_eq!(session.role, Role::User);
    assert_eq!(session.join_date, date::today());
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn simulated_signup_validates_every_field() {
    let cases = [
        ("a@test.com", "secret1", "   "),
        ("", "secret1", "Name"),
        ("a@test.com", "short", "Name"),
    ];
    for (email, password, name) in cases {
        let mut store = SessionStore::load(MemoryStorage::new());
        let err = store
            .signup(&SimulatedAuth, email, password, name)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ClientErrorKind::InvalidRegistration);
        assert!(!store.is_authenticated());
    }
}

#[tokio::test]
async fn simulated_reset_password_always_succeeds() {
    let store = SessionStore::load(MemoryStorage::new());
    store
        .reset_password(&SimulatedAuth, "anyone@test.com")
        .await
        .unwrap();
}

// =========================================================
// 持久化
// =========================================================

#[test]
fn persisted_session_round_trips() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::load(storage.clone());
    store.establish(sample_session()).unwrap();

    let reloaded = SessionStore::load(storage);
    assert_eq!(reloaded.session(), Some(&sample_session()));
}

#[test]
fn persisted_record_uses_camel_case_layout() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::load(storage.clone());
    store.establish(sample_session()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&storage.get(STORAGE_SESSION_KEY).unwrap()).unwrap();
    assert_eq!(raw["joinDate"], "2024-03-09");
    assert_eq!(raw["role"], "moderator");
}

#[test]
fn corrupt_record_is_discarded() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set(STORAGE_SESSION_KEY, "{\"id\": 12, broken");

    let store = SessionStore::load(storage.clone());
    assert!(!store.is_authenticated());
    assert!(storage.get(STORAGE_SESSION_KEY).is_none());
}

#[test]
fn logout_is_idempotent_and_clears_storage() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set(STORAGE_TOKEN_KEY, "token");
    let mut store = SessionStore::load(storage.clone());
    store.establish(sample_session()).unwrap();
    let secondary = MemoryStorage::new();

    store.logout(&secondary);
    store.logout(&secondary);

    assert!(!store.is_authenticated());
    assert!(storage.get(STORAGE_SESSION_KEY).is_none());
    assert!(storage.get(STORAGE_TOKEN_KEY).is_none());
}

#[test]
fn logout_clears_token_from_both_scopes() {
    let primary = Rc::new(MemoryStorage::new());
    let secondary = MemoryStorage::new();
    primary.set(STORAGE_TOKEN_KEY, "local-token");
    secondary.set(STORAGE_TOKEN_KEY, "session-token");
    secondary.set("unrelated", "kept");
    let mut store = SessionStore::load(primary.clone());
    store.establish(sample_session()).unwrap();

    store.logout(&secondary);

    let scopes = StorageScopes::new(primary.clone(), &secondary);
    assert_eq!(scopes.get_first(STORAGE_TOKEN_KEY), None);
    assert_eq!(secondary.get("unrelated").as_deref(), Some("kept"));
    assert!(SessionStore::load(primary).session().is_none());
}

#[test]
fn update_profile_persists_new_name() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = SessionStore::load(storage.clone());
    store.establish(sample_session()).unwrap();

    store.update_profile("Jane Q. Doe", None).unwrap();

    let reloaded = SessionStore::load(storage);
    let session = reloaded.session().unwrap();
    assert_eq!(session.name, "Jane Q. Doe");
    assert_eq!(session.avatar, None);
    assert_eq!(session.id, "abc");
}

#[test]
fn update_profile_requires_session_and_name() {
    let mut store = SessionStore::load(MemoryStorage::new());
    assert!(store.update_profile("Name", None).is_err());

    store.establish(sample_session()).unwrap();
    let err = store.update_profile("  ", None).unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Validation);
}

// =========================================================
// 远程认证
// =========================================================

#[tokio::test]
async fn remote_login_stores_token_and_uses_claims() {
    let api = remote_api();
    let token = encode_test_token(&json!({"userID": "u-1", "name": "Claim Name"}));
    api.client().mock_response(
        &format!("{}/login", BASE),
        200,
        json!({"message": "Login successful", "token": token, "name": "Ada Lovelace"}),
    );

    let token_store = Rc::new(MemoryStorage::new());
    let auth = RemoteAuth::new(api.clone(), token_store.clone());
    let mut store = SessionStore::load(MemoryStorage::new());

    let session = store.login(&auth, "ada@example.com", "Secret1").await.unwrap();
    assert_eq!(session.id, "u-1");
    assert_eq!(session.name, "Ada Lovelace");
    assert_eq!(token_store.get(STORAGE_TOKEN_KEY).as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn remote_login_maps_401_to_invalid_credentials() {
    let api = remote_api();
    api.client().mock_response(
        &format!("{}/login", BASE),
        401,
        json!({"message": "Invalid credentials"}),
    );
    let auth = RemoteAuth::new(api, MemoryStorage::new());
    let mut store = SessionStore::load(MemoryStorage::new());

    let err = store.login(&auth, "ada@example.com", "Secret1").await.unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::InvalidCredentials);
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn remote_login_checks_locally_before_calling_backend() {
    let api = remote_api();
    let auth = RemoteAuth::new(api.clone(), MemoryStorage::new());
    let mut store = SessionStore::load(MemoryStorage::new());

    assert!(store.login(&auth, "ada@example.com", "123").await.is_err());
    assert_eq!(api.client().request_count(), 0);
}

#[tokio::test]
async fn remote_signup_reports_duplicate_email() {
    let api = remote_api();
    api.client().mock_response(
        &format!("{}/signup/", BASE),
        409,
        json!({"message": "User already exists"}),
    );
    let auth = RemoteAuth::new(api, MemoryStorage::new());
    let mut store = SessionStore::load(MemoryStorage::new());

    let err = store
        .signup(&auth, "ada@example.com", "Secret1", "Ada")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Conflict);
    assert!(err.message().contains("already exists"));
}

#[tokio::test]
async fn remote_signup_surfaces_validation_message() {
    let api = remote_api();
    api.client().mock_response(
        &format!("{}/signup/", BASE),
        400,
        json!({"message": "Email is invalid"}),
    );
    let auth = RemoteAuth::new(api, MemoryStorage::new());
    let mut store = SessionStore::load(MemoryStorage::new());

    let err = store
        .signup(&auth, "ada@example.com", "Secret1", "Ada")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Validation);
    assert_eq!(err.message(), "Email is invalid");
}

#[tokio::test]
async fn remote_signup_sends_normalized_email() {
    let api = remote_api();
    api.client()
        .mock_response(&format!("{}/signup/", BASE), 201, json!({"message": "created"}));
    let auth = RemoteAuth::new(api.clone(), MemoryStorage::new());
    let mut store = SessionStore::load(MemoryStorage::new());

    let session = store
        .signup(&auth, "  Ada@Example.COM ", "Secret1", " Ada ")
        .await
        .unwrap();
    assert_eq!(session.email, "ada@example.com");
    assert!(!session.verified);
}

#[tokio::test]
async fn remote_reset_password_surfaces_network_failure() {
    let api = remote_api();
    api.client()
        .mock_unreachable(&format!("{}/reset-password/", BASE));
    let auth = RemoteAuth::new(api, MemoryStorage::new());
    let store = SessionStore::load(MemoryStorage::new());

    let err = store
        .reset_password(&auth, "ada@example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ClientErrorKind::Network);
}

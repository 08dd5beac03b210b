use axum::http::{HeaderMap, HeaderValue};

use periph_auth_types::header::ACCESS_TOKEN_HEADER;
use periph_auth_types::token::{TokenError, now_secs};
use periph_domain::user::UserRole;
use periph_store::error::StoreServiceError;
use periph_store::usecase::gate::{AuthGate, Guard, require_role};
use periph_testing::auth::{MockAuth, test_signer};

use crate::helpers::{MockUserRepo, admin, alice};

fn gate() -> AuthGate<MockUserRepo> {
    AuthGate {
        users: MockUserRepo::new(vec![alice(), admin()]),
        signer: test_signer(),
    }
}

#[tokio::test]
async fn should_reject_missing_header_with_401_before_role_check() {
    let result = gate()
        .check(&HeaderMap::new(), Guard::Admin, now_secs())
        .await;
    assert!(
        matches!(result, Err(StoreServiceError::Token(TokenError::Missing))),
        "expected Token(Missing), got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_header_as_missing() {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_TOKEN_HEADER, HeaderValue::from_static("  "));

    let result = gate().authenticate(&headers, now_secs()).await;
    assert!(matches!(
        result,
        Err(StoreServiceError::Token(TokenError::Missing))
    ));
}

#[tokio::test]
async fn should_reject_expired_token_with_401_before_role_check() {
    let now = now_secs();
    let stale = MockAuth::issued_at("alice", now - 2 * 3600);

    let result = gate().check(&stale.headers(), Guard::Admin, now).await;
    assert!(matches!(
        result,
        Err(StoreServiceError::Token(TokenError::Expired))
    ));
}

#[tokio::test]
async fn should_forbid_non_admin_on_admin_guard() {
    let result = gate()
        .check(&MockAuth::new("alice").headers(), Guard::Admin, now_secs())
        .await;
    assert!(
        matches!(result, Err(StoreServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_admit_admin_on_admin_guard() {
    let subject = gate()
        .check(&MockAuth::new("root").headers(), Guard::Admin, now_secs())
        .await
        .unwrap();
    assert_eq!(subject.username, "root");
    assert_eq!(subject.role, UserRole::Admin);
}

#[tokio::test]
async fn should_admit_any_role_on_authenticated_guard() {
    for username in ["alice", "root"] {
        let subject = gate()
            .check(
                &MockAuth::new(username).headers(),
                Guard::Authenticated,
                now_secs(),
            )
            .await
            .unwrap();
        assert_eq!(subject.username, username);
    }
}

#[test]
fn should_require_exact_role() {
    let user = alice().subject();
    let root = admin().subject();

    assert!(matches!(
        require_role(&user, UserRole::Admin),
        Err(StoreServiceError::Forbidden)
    ));
    assert!(require_role(&root, UserRole::Admin).is_ok());
    assert!(require_role(&user, UserRole::User).is_ok());
}

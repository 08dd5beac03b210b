use periph_auth_types::token::ACCESS_TOKEN_TTL_SECS;
use periph_domain::user::UserRole;
use periph_store::error::StoreServiceError;
use periph_store::usecase::account::{
    CredentialsInput, LoginUseCase, RegisterUseCase, VerifyCredentialsUseCase,
};
use periph_testing::auth::test_signer;

use crate::helpers::MockUserRepo;

const T0: u64 = 1_700_000_000;

fn credentials(username: &str, password: &str) -> CredentialsInput {
    CredentialsInput {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

async fn registered(username: &str, password: &str) -> MockUserRepo {
    let users = MockUserRepo::empty();
    RegisterUseCase { users: &users }
        .execute(credentials(username, password))
        .await
        .unwrap();
    users
}

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_with_user_role_and_hashed_password() {
    let users = registered("alice", "pw1").await;

    let stored = users.users_handle().lock().unwrap().clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].username, "alice");
    assert_eq!(stored[0].role, UserRole::User);
    assert_ne!(stored[0].password_hash, "pw1");
    assert!(stored[0].password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn should_reject_duplicate_registration() {
    let users = registered("alice", "pw1").await;

    let result = RegisterUseCase { users: &users }
        .execute(credentials("alice", "other"))
        .await;
    assert!(
        matches!(result, Err(StoreServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
    assert_eq!(users.users_handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_blank_username_or_empty_password() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUseCase { users: &users };

    for (username, password) in [("", "pw"), ("   ", "pw"), ("alice", "")] {
        let result = usecase.execute(credentials(username, password)).await;
        assert!(
            matches!(result, Err(StoreServiceError::MissingData)),
            "expected MissingData for ({username:?}, {password:?}), got {result:?}"
        );
    }
    assert!(users.users_handle().lock().unwrap().is_empty());
}

// ── VerifyCredentialsUseCase ─────────────────────────────────────────────────

#[tokio::test]
async fn should_verify_correct_password() {
    let users = registered("alice", "pw1").await;

    let user = VerifyCredentialsUseCase { users: &users }
        .execute(credentials("alice", "pw1"))
        .await
        .unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn should_return_same_error_for_wrong_password_and_unknown_user() {
    let users = registered("alice", "pw1").await;
    let usecase = VerifyCredentialsUseCase { users: &users };

    let wrong_password = usecase.execute(credentials("alice", "nope")).await;
    let unknown_user = usecase.execute(credentials("bob", "pw1")).await;

    assert!(matches!(
        wrong_password,
        Err(StoreServiceError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_user,
        Err(StoreServiceError::InvalidCredentials)
    ));
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_for_registered_user() {
    let users = registered("alice", "pw1").await;
    let signer = test_signer();

    let out = LoginUseCase {
        users: &users,
        signer: signer.clone(),
    }
    .execute(credentials("alice", "pw1"), T0)
    .await
    .unwrap();

    assert_eq!(out.expires_at, T0 + ACCESS_TOKEN_TTL_SECS);
    let claims = signer.decode(&out.token, T0).unwrap();
    assert_eq!(claims.sub, "alice");
}

#[tokio::test]
async fn should_not_issue_token_for_wrong_password() {
    let users = registered("alice", "pw1").await;

    let result = LoginUseCase {
        users: &users,
        signer: test_signer(),
    }
    .execute(credentials("alice", "pw2"), T0)
    .await;
    assert!(matches!(result, Err(StoreServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn should_not_issue_token_before_registration() {
    let result = LoginUseCase {
        users: MockUserRepo::empty(),
        signer: test_signer(),
    }
    .execute(credentials("alice", "pw1"), T0)
    .await;
    assert!(matches!(result, Err(StoreServiceError::InvalidCredentials)));
}

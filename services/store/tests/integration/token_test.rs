use periph_auth_types::token::{ACCESS_TOKEN_TTL_SECS, TokenError, TokenSigner};
use periph_domain::user::UserRole;
use periph_store::error::StoreServiceError;
use periph_store::usecase::token::VerifyTokenUseCase;
use periph_testing::auth::{MockAuth, test_signer};

use crate::helpers::{FailingUserRepo, MockUserRepo, admin, alice, test_user};

const T0: u64 = 1_700_000_000;
const MINUTE: u64 = 60;

fn verify(users: MockUserRepo) -> VerifyTokenUseCase<MockUserRepo> {
    VerifyTokenUseCase {
        users,
        signer: test_signer(),
    }
}

fn assert_token_error(result: Result<impl std::fmt::Debug, StoreServiceError>, expected: TokenError) {
    match result {
        Err(StoreServiceError::Token(err)) => assert_eq!(err, expected),
        other => panic!("expected Token({expected:?}), got {other:?}"),
    }
}

#[tokio::test]
async fn should_accept_token_within_lifetime() {
    let token = MockAuth::issued_at("alice", T0).token;

    let subject = verify(MockUserRepo::new(vec![alice()]))
        .execute(&token, T0 + 59 * MINUTE)
        .await
        .unwrap();
    assert_eq!(subject.username, "alice");
    assert_eq!(subject.role, UserRole::User);
}

#[tokio::test]
async fn should_reject_token_after_lifetime() {
    let token = MockAuth::issued_at("alice", T0).token;

    let result = verify(MockUserRepo::new(vec![alice()]))
        .execute(&token, T0 + 61 * MINUTE)
        .await;
    assert_token_error(result, TokenError::Expired);
}

#[tokio::test]
async fn should_reject_token_at_exact_expiry() {
    let token = MockAuth::issued_at("alice", T0).token;

    let result = verify(MockUserRepo::new(vec![alice()]))
        .execute(&token, T0 + ACCESS_TOKEN_TTL_SECS)
        .await;
    assert_token_error(result, TokenError::Expired);
}

#[tokio::test]
async fn should_reject_token_for_deleted_account() {
    let token = MockAuth::issued_at("ghost", T0).token;

    let result = verify(MockUserRepo::new(vec![alice()]))
        .execute(&token, T0 + MINUTE)
        .await;
    assert_token_error(result, TokenError::SubjectNotFound);
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let token = TokenSigner::new("someone-else")
        .issue("alice", T0)
        .unwrap()
        .token;

    let result = verify(MockUserRepo::new(vec![alice()]))
        .execute(&token, T0 + MINUTE)
        .await;
    assert_token_error(result, TokenError::SignatureInvalid);
}

#[tokio::test]
async fn should_reject_garbage_token() {
    let result = verify(MockUserRepo::new(vec![alice()]))
        .execute("not-a-jwt", T0)
        .await;
    assert_token_error(result, TokenError::Malformed);
}

#[tokio::test]
async fn should_take_role_from_stored_account() {
    let token = MockAuth::issued_at("root", T0).token;

    let subject = verify(MockUserRepo::new(vec![admin()]))
        .execute(&token, T0 + MINUTE)
        .await
        .unwrap();
    assert!(subject.is_admin());

    // Same token, account since demoted.
    let subject = verify(MockUserRepo::new(vec![test_user("root", UserRole::User)]))
        .execute(&token, T0 + MINUTE)
        .await
        .unwrap();
    assert!(!subject.is_admin());
}

#[tokio::test]
async fn should_surface_store_failure_as_internal() {
    let token = MockAuth::issued_at("alice", T0).token;

    let result = VerifyTokenUseCase {
        users: FailingUserRepo,
        signer: test_signer(),
    }
    .execute(&token, T0 + MINUTE)
    .await;
    assert!(matches!(result, Err(StoreServiceError::Internal(_))));
}

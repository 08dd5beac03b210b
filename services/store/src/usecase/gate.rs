//! Authorization gate: authentication first, role check second.

use axum::http::HeaderMap;

use periph_auth_types::header::read_access_token;
use periph_auth_types::token::TokenSigner;
use periph_domain::user::{Subject, UserRole};

use crate::domain::repository::UserRepository;
use crate::error::StoreServiceError;
use crate::usecase::token::VerifyTokenUseCase;

/// Access level an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Any valid token for an existing account.
    Authenticated,
    /// Valid token and the `admin` role.
    Admin,
}

pub struct AuthGate<U: UserRepository> {
    pub users: U,
    pub signer: TokenSigner,
}

impl<U: UserRepository> AuthGate<U> {
    /// Resolve the caller from the `x-access-token` header.
    pub async fn authenticate(
        &self,
        headers: &HeaderMap,
        now: u64,
    ) -> Result<Subject, StoreServiceError> {
        let token = read_access_token(headers)?;
        VerifyTokenUseCase {
            users: &self.users,
            signer: self.signer.clone(),
        }
        .execute(token, now)
        .await
    }

    /// Run `guard` against the request. An authentication failure returns
    /// before the role is looked at.
    pub async fn check(
        &self,
        headers: &HeaderMap,
        guard: Guard,
        now: u64,
    ) -> Result<Subject, StoreServiceError> {
        let subject = self.authenticate(headers, now).await?;
        if guard == Guard::Admin {
            require_role(&subject, UserRole::Admin)?;
        }
        Ok(subject)
    }
}

/// Fail with `Forbidden` unless `subject` holds `role`.
pub fn require_role(subject: &Subject, role: UserRole) -> Result<(), StoreServiceError> {
    if subject.role != role {
        tracing::debug!(username = %subject.username, required = %role, "role check failed");
        return Err(StoreServiceError::Forbidden);
    }
    Ok(())
}

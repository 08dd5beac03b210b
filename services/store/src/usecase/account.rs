use chrono::Utc;

use periph_auth_types::token::TokenSigner;
use periph_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::StoreServiceError;
use crate::usecase::password::{hash_password, verify_password};

/// Username and password as submitted by the client.
pub struct CredentialsInput {
    pub username: String,
    pub password: String,
}

impl CredentialsInput {
    fn validate(&self) -> Result<(), StoreServiceError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(StoreServiceError::MissingData);
        }
        Ok(())
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUseCase<U> {
    /// Create a `user`-role account. Fails with `UserAlreadyExists` if the name is taken.
    pub async fn execute(&self, input: CredentialsInput) -> Result<(), StoreServiceError> {
        input.validate()?;

        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(StoreServiceError::UserAlreadyExists);
        }

        let user = User {
            username: input.username,
            password_hash: hash_password(input.password).await?,
            role: UserRole::User,
            created_at: Utc::now(),
        };
        // A concurrent registration can still win between the check and the insert;
        // the repository reports that as `UserAlreadyExists` too.
        self.users.create(&user).await?;
        tracing::info!(username = %user.username, "user registered");
        Ok(())
    }
}

// ── VerifyCredentials ────────────────────────────────────────────────────────

pub struct VerifyCredentialsUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> VerifyCredentialsUseCase<U> {
    /// Same error for an unknown username and a wrong password.
    pub async fn execute(&self, input: CredentialsInput) -> Result<User, StoreServiceError> {
        input
            .validate()
            .map_err(|_| StoreServiceError::InvalidCredentials)?;

        let user = self.users.find_by_username(&input.username).await?;
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());

        match (verify_password(input.password, stored_hash).await?, user) {
            (true, Some(user)) => Ok(user),
            _ => Err(StoreServiceError::InvalidCredentials),
        }
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub expires_at: u64,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub signer: TokenSigner,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(
        &self,
        input: CredentialsInput,
        now: u64,
    ) -> Result<LoginOutput, StoreServiceError> {
        let user = VerifyCredentialsUseCase { users: &self.users }
            .execute(input)
            .await?;

        let issued = self
            .signer
            .issue(&user.username, now)
            .map_err(|e| StoreServiceError::Internal(e.into()))?;

        Ok(LoginOutput {
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}

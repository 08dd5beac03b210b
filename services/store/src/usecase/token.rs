use periph_auth_types::token::{TokenError, TokenSigner};
use periph_domain::user::Subject;

use crate::domain::repository::UserRepository;
use crate::error::StoreServiceError;

/// Full token verification: signature and expiry, then the account must still exist.
///
/// The role on the returned [`Subject`] comes from the stored account, not the token.
pub struct VerifyTokenUseCase<U: UserRepository> {
    pub users: U,
    pub signer: TokenSigner,
}

impl<U: UserRepository> VerifyTokenUseCase<U> {
    pub async fn execute(&self, token: &str, now: u64) -> Result<Subject, StoreServiceError> {
        let claims = self.signer.decode(token, now)?;

        let user = self
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or(TokenError::SubjectNotFound)?;

        Ok(user.subject())
    }
}

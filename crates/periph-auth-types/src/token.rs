//! JWT access-token issuing and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Access-token lifetime in seconds (1 hour).
pub const ACCESS_TOKEN_TTL_SECS: u64 = 3600;

/// Why a presented token was not accepted.
///
/// `SubjectNotFound` is never produced here; the service raises it after the
/// account lookup that follows a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is missing")]
    Missing,
    #[error("malformed token")]
    Malformed,
    #[error("invalid signature")]
    SignatureInvalid,
    #[error("token expired")]
    Expired,
    #[error("user not found")]
    SubjectNotFound,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | username |
/// | `iat` | `iat` | issue time, seconds since epoch |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

/// A freshly signed token and its absolute expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: u64,
}

/// Current wall-clock time in seconds since the UNIX epoch.
pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Signs and validates HS256 access tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: ACCESS_TOKEN_TTL_SECS,
        }
    }

    /// Issue a token for `subject`, valid until `now + ttl`.
    pub fn issue(&self, subject: &str, now: u64) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        let expires_at = now + self.ttl_secs;
        let claims = TokenClaims {
            sub: subject.to_owned(),
            iat: now,
            exp: expires_at,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Decode `token` and check its expiry against `now`.
    ///
    /// The library's own `exp` check reads the system clock, so it is turned
    /// off and expiry is compared here with zero leeway: the token is valid
    /// only while `now < exp`.
    pub fn decode(&self, token: &str, now: u64) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<TokenClaims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            }
        })?;

        if data.claims.sub.is_empty() {
            return Err(TokenError::Malformed);
        }
        if now >= data.claims.exp {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}

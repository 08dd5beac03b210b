//! Mock auth helpers for integration tests.
//!
//! Tokens are signed for real with [`TEST_JWT_SECRET`], so the service under test
//! must be built with a `TokenSigner` over the same secret.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use periph_auth_types::header::ACCESS_TOKEN_HEADER;
use periph_auth_types::token::{TokenSigner, now_secs};

pub const TEST_JWT_SECRET: &str = "periph-test-secret";

pub fn test_signer() -> TokenSigner {
    TokenSigner::new(TEST_JWT_SECRET)
}

/// A signed access token for `username`, issued at `issued_at`.
pub struct MockAuth {
    pub username: String,
    pub token: String,
}

impl MockAuth {
    /// Token issued now.
    pub fn new(username: &str) -> Self {
        Self::issued_at(username, now_secs())
    }

    pub fn issued_at(username: &str, issued_at: u64) -> Self {
        let issued = test_signer()
            .issue(username, issued_at)
            .expect("sign test token");
        Self {
            username: username.to_owned(),
            token: issued.token,
        }
    }

    /// `x-access-token` header pair, for `axum_test` requests.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(ACCESS_TOKEN_HEADER),
            HeaderValue::from_str(&self.token).expect("token is a valid header value"),
        )
    }

    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        let (name, value) = self.header();
        map.insert(name, value);
        map
    }
}

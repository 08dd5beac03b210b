//! Access-token transport over a request header.

use http::HeaderMap;

use crate::token::TokenError;

/// Request header carrying the signed access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Read the raw access token from `headers`.
///
/// Absent or blank header is `Missing`; a value that is not visible ASCII is
/// `Malformed`.
pub fn read_access_token(headers: &HeaderMap) -> Result<&str, TokenError> {
    let value = headers
        .get(ACCESS_TOKEN_HEADER)
        .ok_or(TokenError::Missing)?;
    let token = value.to_str().map_err(|_| TokenError::Malformed)?.trim();
    if token.is_empty() {
        return Err(TokenError::Missing);
    }
    Ok(token)
}

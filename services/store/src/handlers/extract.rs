//! Caller-identity extractors.
//!
//! Put these before any body extractor in a handler's argument list so that a
//! bad token is reported before the body is read.

use std::future::Future;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use periph_auth_types::token::now_secs;
use periph_domain::user::Subject;

use crate::error::StoreServiceError;
use crate::state::AppState;
use crate::usecase::gate::Guard;

/// Any caller holding a valid token for an existing account.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Subject);

/// An authenticated caller with the `admin` role.
///
/// Authentication failures are rejected with 401 before the role is checked (403).
#[derive(Debug, Clone)]
pub struct AdminOnly(pub Subject);

// Headers are cloned up front so the returned future borrows nothing from `parts`.
fn check(
    parts: &Parts,
    state: &AppState,
    guard: Guard,
) -> impl Future<Output = Result<Subject, StoreServiceError>> + Send + use<> {
    let headers = parts.headers.clone();
    let gate = state.auth_gate();
    async move { gate.check(&headers, guard, now_secs()).await }
}

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = StoreServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let subject = check(parts, state, Guard::Authenticated);
        async move { subject.await.map(Self) }
    }
}

impl FromRequestParts<AppState> for AdminOnly {
    type Rejection = StoreServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let subject = check(parts, state, Guard::Admin);
        async move { subject.await.map(Self) }
    }
}

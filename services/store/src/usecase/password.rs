//! Argon2id password hashing.
//!
//! Hashing and verification are CPU-bound, so both run on the blocking pool.

use std::sync::OnceLock;

use anyhow::Context as _;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tokio::task;

use crate::error::StoreServiceError;

fn hash_blocking(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))
}

fn verify_blocking(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Hash compared against when the account does not exist, so unknown users
/// cost the same verification work as a wrong password.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hash_blocking("periph-dummy-password").ok())
        .as_deref()
}

/// Produce a salted argon2id PHC string for `password`.
pub async fn hash_password(password: String) -> Result<String, StoreServiceError> {
    let hash = task::spawn_blocking(move || hash_blocking(&password))
        .await
        .context("password hashing task panicked")??;
    Ok(hash)
}

/// Check `password` against `stored_hash`.
///
/// With no stored hash the password is still run through a dummy verification
/// and the result is always `false`.
pub async fn verify_password(
    password: String,
    stored_hash: Option<String>,
) -> Result<bool, StoreServiceError> {
    let valid = task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_blocking(&password, &hash),
        None => {
            if let Some(dummy) = dummy_hash() {
                verify_blocking(&password, dummy);
            }
            false
        }
    })
    .await
    .context("password verification task panicked")?;
    Ok(valid)
}

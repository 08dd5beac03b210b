use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use periph_auth_types::token::now_secs;

use crate::error::StoreServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::account::{CredentialsInput, LoginUseCase, RegisterUseCase};

/// Missing fields deserialize as empty and are rejected by validation as `MISSING_DATA`.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<CredentialsRequest> for CredentialsInput {
    fn from(body: CredentialsRequest) -> Self {
        Self {
            username: body.username,
            password: body.password,
        }
    }
}

// ── POST /register ────────────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, StoreServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
    };
    usecase.execute(body.into()).await?;
    Ok(Json(MessageResponse::new("User registered successfully!")))
}

// ── POST /login ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Unix seconds.
    pub expires_at: u64,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, StoreServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        signer: state.signer.clone(),
    };
    let out = usecase.execute(body.into(), now_secs()).await?;
    Ok(Json(LoginResponse {
        token: out.token,
        expires_at: out.expires_at,
    }))
}

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use periph_auth_types::token::TokenSigner;

use crate::infra::db::{DbOrderRepository, DbProductRepository, DbUserRepository};
use crate::infra::scraper::ReqwestPageFetcher;
use crate::usecase::gate::AuthGate;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub signer: TokenSigner,
    pub fetcher: ReqwestPageFetcher,
    pub scrape_url: Arc<str>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn auth_gate(&self) -> AuthGate<DbUserRepository> {
        AuthGate {
            users: self.user_repo(),
            signer: self.signer.clone(),
        }
    }
}

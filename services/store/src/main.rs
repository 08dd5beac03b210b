use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use periph_auth_types::token::TokenSigner;
use periph_core::tracing::init_tracing;
use periph_store::config::StoreConfig;
use periph_store::infra::scraper::ReqwestPageFetcher;
use periph_store::router::build_router;
use periph_store::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = StoreConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let fetcher = ReqwestPageFetcher::new(Duration::from_secs(config.scrape_timeout_secs))
        .context("failed to build HTTP client")?;

    let state = AppState {
        db: Arc::new(db),
        signer: TokenSigner::new(&config.jwt_secret),
        fetcher,
        scrape_url: config.scrape_url.into(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.store_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("store service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}

use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::IngestOutcome;
use crate::error::StoreServiceError;
use crate::handlers::extract::AdminOnly;
use crate::state::AppState;
use crate::usecase::ingest::IngestUseCase;

#[derive(Serialize)]
pub struct ScrapeResponse {
    pub message: &'static str,
    pub count: u64,
}

impl From<IngestOutcome> for ScrapeResponse {
    fn from(outcome: IngestOutcome) -> Self {
        let message = match outcome {
            IngestOutcome::Ingested { .. } => "Products scraped and saved!",
            IngestOutcome::NothingFound => "No products found!",
        };
        Self {
            message,
            count: outcome.count(),
        }
    }
}

// ── GET /scrape ───────────────────────────────────────────────────────────────

pub async fn scrape(
    AdminOnly(subject): AdminOnly,
    State(state): State<AppState>,
) -> Result<Json<ScrapeResponse>, StoreServiceError> {
    tracing::info!(username = %subject.username, url = %state.scrape_url, "catalog ingestion requested");
    let usecase = IngestUseCase {
        fetcher: state.fetcher.clone(),
        products: state.product_repo(),
    };
    let outcome = usecase.execute(&state.scrape_url).await?;
    Ok(Json(outcome.into()))
}

use periph_domain::product::Product;

use crate::domain::repository::{PageFetcher, ProductRepository};
use crate::domain::types::IngestOutcome;
use crate::error::StoreServiceError;
use crate::infra::scraper::parse_catalog_page;

/// Fetch the external catalog page, extract its product cards and load them
/// into the catalog in one batch.
///
/// A failed fetch or a page with no usable cards is `NothingFound`, not an error.
/// Only the batch write itself can fail the run.
pub struct IngestUseCase<F: PageFetcher, R: ProductRepository> {
    pub fetcher: F,
    pub products: R,
}

impl<F: PageFetcher, R: ProductRepository> IngestUseCase<F, R> {
    pub async fn execute(&self, url: &str) -> Result<IngestOutcome, StoreServiceError> {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(url, error = %e, "catalog page fetch failed");
                return Ok(IngestOutcome::NothingFound);
            }
        };

        let products: Vec<Product> = parse_catalog_page(&html, url)
            .into_iter()
            .map(Product::from)
            .collect();
        if products.is_empty() {
            tracing::info!(url, "no products found on catalog page");
            return Ok(IngestOutcome::NothingFound);
        }

        let count = self.products.create_many(&products).await?;
        tracing::info!(url, count, "catalog ingested");
        Ok(IngestOutcome::Ingested { count })
    }
}

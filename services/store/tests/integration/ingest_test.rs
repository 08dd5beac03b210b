use periph_store::domain::types::IngestOutcome;
use periph_store::usecase::ingest::IngestUseCase;
use periph_testing::catalog::{CatalogCard, catalog_page, empty_page};

use crate::helpers::{CATALOG_URL, MockFetcher, MockProductRepo};

#[tokio::test]
async fn should_ingest_every_well_formed_card_in_one_batch() {
    let html = catalog_page(&[
        CatalogCard::new("Wireless Mouse", "£12.50", "/web/p/mice/1/"),
        CatalogCard::new("USB Keyboard", "£30.00", "/web/p/keyboards/2/"),
    ]);
    let repo = MockProductRepo::empty();

    let outcome = IngestUseCase {
        fetcher: MockFetcher::Page(html),
        products: &repo,
    }
    .execute(CATALOG_URL)
    .await
    .unwrap();

    assert_eq!(outcome, IngestOutcome::Ingested { count: 2 });
    assert_eq!(*repo.batch_writes_handle().lock().unwrap(), 1);

    let stored = repo.products_handle().lock().unwrap().clone();
    assert_eq!(stored[0].name.as_deref(), Some("Wireless Mouse"));
    assert_eq!(stored[0].price.as_deref(), Some("£12.50"));
    assert_eq!(
        stored[0].link.as_deref(),
        Some("https://shop.example.com/web/p/mice/1/")
    );
    assert!(stored.iter().all(|p| p.external_id.is_none()));
}

#[tokio::test]
async fn should_skip_card_without_link() {
    let html = catalog_page(&[
        CatalogCard::new("A", "£1", "/a"),
        CatalogCard::new("B", "£2", "/b").without_link(),
        CatalogCard::new("C", "£3", "/c"),
    ]);
    let repo = MockProductRepo::empty();

    let outcome = IngestUseCase {
        fetcher: MockFetcher::Page(html),
        products: &repo,
    }
    .execute(CATALOG_URL)
    .await
    .unwrap();

    assert_eq!(outcome.count(), 2);
    let names: Vec<_> = repo
        .products_handle()
        .lock()
        .unwrap()
        .iter()
        .filter_map(|p| p.name.clone())
        .collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[tokio::test]
async fn should_leave_catalog_untouched_when_no_cards() {
    let repo = MockProductRepo::empty();

    for html in [catalog_page(&[]), empty_page()] {
        let outcome = IngestUseCase {
            fetcher: MockFetcher::Page(html),
            products: &repo,
        }
        .execute(CATALOG_URL)
        .await
        .unwrap();
        assert_eq!(outcome, IngestOutcome::NothingFound);
    }

    assert!(repo.products_handle().lock().unwrap().is_empty());
    assert_eq!(*repo.batch_writes_handle().lock().unwrap(), 0);
}

#[tokio::test]
async fn should_treat_fetch_failure_as_nothing_found() {
    let repo = MockProductRepo::empty();

    let outcome = IngestUseCase {
        fetcher: MockFetcher::Status(503),
        products: &repo,
    }
    .execute(CATALOG_URL)
    .await
    .unwrap();

    assert_eq!(outcome, IngestOutcome::NothingFound);
    assert_eq!(outcome.count(), 0);
    assert!(repo.products_handle().lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_duplicate_products_on_repeated_runs() {
    let html = catalog_page(&[CatalogCard::new("Mouse", "£1", "/m")]);
    let repo = MockProductRepo::empty();
    let usecase = IngestUseCase {
        fetcher: MockFetcher::Page(html),
        products: &repo,
    };

    usecase.execute(CATALOG_URL).await.unwrap();
    usecase.execute(CATALOG_URL).await.unwrap();

    assert_eq!(repo.products_handle().lock().unwrap().len(), 2);
}

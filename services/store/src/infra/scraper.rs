//! External catalog page: HTTP fetch and product-card extraction.

use std::sync::OnceLock;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::repository::PageFetcher;
use crate::domain::types::{CardError, FetchError, ScrapedProduct};

// ── Fetch ────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ReqwestPageFetcher {
    client: reqwest::Client,
}

impl ReqwestPageFetcher {
    /// Every request is bounded by `timeout`, connect through body.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("periph-store/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

// ── Parse ────────────────────────────────────────────────────────────────────

/// Selectors for the catalog grid. Class attributes are matched exactly.
struct CardSelectors {
    container: Selector,
    card: Selector,
    name: Selector,
    price: Selector,
    link: Selector,
}

impl CardSelectors {
    fn get() -> Option<&'static Self> {
        static INSTANCE: OnceLock<Option<CardSelectors>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                Some(Self {
                    container: Selector::parse(r#"div[class="-mx-2 flex flex-wrap"]"#).ok()?,
                    card: Selector::parse(
                        r#"div[class="flex w-full flex-col p-2 md:w-1/2 lg:w-1/3"]"#,
                    )
                    .ok()?,
                    name: Selector::parse(r#"div[class="src__LineClampGrid-sc-1r3bpf8-5 kAwYla"]"#)
                        .ok()?,
                    price: Selector::parse(r#"div[class="sc-aXZVg bZfWPp"]"#).ok()?,
                    link: Selector::parse(r#"a[class="sc-aXZVg dyjyw"]"#).ok()?,
                })
            })
            .as_ref()
    }
}

/// Extract every well-formed product card from the catalog page at `page_url`.
///
/// No grid container means no products. Cards missing a field are skipped one
/// by one; they never abort the rest of the page.
pub fn parse_catalog_page(html: &str, page_url: &str) -> Vec<ScrapedProduct> {
    let Some(selectors) = CardSelectors::get() else {
        tracing::error!("catalog card selectors failed to compile");
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let Some(container) = document.select(&selectors.container).next() else {
        tracing::info!(page_url, "catalog grid not found");
        return Vec::new();
    };

    let base = Url::parse(page_url).ok();
    container
        .select(&selectors.card)
        .enumerate()
        .filter_map(
            |(index, card)| match parse_card(card, selectors, base.as_ref()) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::debug!(index, error = %e, "skipping product card");
                    None
                }
            },
        )
        .collect()
}

fn parse_card(
    card: ElementRef<'_>,
    selectors: &CardSelectors,
    base: Option<&Url>,
) -> Result<ScrapedProduct, CardError> {
    let name = first_text(card, &selectors.name).ok_or(CardError::MissingName)?;
    let price = first_text(card, &selectors.price).ok_or(CardError::MissingPrice)?;
    let href = card
        .select(&selectors.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or(CardError::MissingLink)?;
    let link = resolve_link(href, base).ok_or(CardError::InvalidLink)?;

    Ok(ScrapedProduct { name, price, link })
}

/// Trimmed text of the first match; blank counts as absent.
fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let text: String = card.select(selector).next()?.text().collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn resolve_link(href: &str, base: Option<&Url>) -> Option<String> {
    let url = match base {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };
    Some(url.into())
}

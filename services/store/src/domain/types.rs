use std::fmt;

use chrono::{DateTime, Utc};

use periph_domain::product::Product;
use periph_domain::user::{Subject, UserRole};

/// Stored account. The password hash never leaves the service.
#[derive(Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn subject(&self) -> Subject {
        Subject {
            username: self.username.clone(),
            role: self.role,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Product extracted from one card of the external catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedProduct {
    pub name: String,
    pub price: String,
    pub link: String,
}

impl From<ScrapedProduct> for Product {
    fn from(scraped: ScrapedProduct) -> Self {
        Product {
            external_id: None,
            name: Some(scraped.name),
            price: Some(scraped.price),
            link: Some(scraped.link),
            extra: Default::default(),
        }
    }
}

/// Why one catalog card was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("card has no name")]
    MissingName,
    #[error("card has no price")]
    MissingPrice,
    #[error("card has no link")]
    MissingLink,
    #[error("card link cannot be resolved")]
    InvalidLink,
}

/// Failure fetching the external catalog page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

/// Result of one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Ingested { count: u64 },
    NothingFound,
}

impl IngestOutcome {
    pub fn count(self) -> u64 {
        match self {
            Self::Ingested { count } => count,
            Self::NothingFound => 0,
        }
    }
}

/// Default catalog page scraped by `GET /scrape`.
pub const DEFAULT_SCRAPE_URL: &str = "https://twen.rs-online.com/web/c/computing-peripherals/";

/// Store service configuration loaded from environment variables.
#[derive(Debug)]
pub struct StoreConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3110). Env var: `STORE_PORT`.
    pub store_port: u16,
    /// Catalog page fetched by the ingestion job. Env var: `SCRAPE_URL`.
    pub scrape_url: String,
    /// Upper bound on the catalog page fetch, in seconds (default 10). Env var: `SCRAPE_TIMEOUT_SECS`.
    pub scrape_timeout_secs: u64,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            store_port: std::env::var("STORE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
            scrape_url: std::env::var("SCRAPE_URL")
                .unwrap_or_else(|_| DEFAULT_SCRAPE_URL.to_owned()),
            scrape_timeout_secs: std::env::var("SCRAPE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

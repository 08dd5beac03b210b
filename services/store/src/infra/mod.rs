pub mod db;
pub mod scraper;

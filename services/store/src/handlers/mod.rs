use serde::Serialize;

pub mod account;
pub mod extract;
pub mod health;
pub mod orders;
pub mod products;
pub mod scrape;

/// `{"message": ...}` acknowledgement body.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

//! Order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of an order's product list, as supplied by the caller.
///
/// A bare product reference (`"p1"`), an object carrying the reference plus
/// free-form details, or any other JSON value, kept exactly as sent.
/// References are not checked against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItem {
    Reference(String),
    Detailed {
        #[serde(rename = "id", alias = "id_", alias = "product_id")]
        product_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantity: Option<u32>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Other(Value),
}

impl LineItem {
    /// The string product reference, when the item carries one.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            Self::Reference(id) => Some(id),
            Self::Detailed { product_id, .. } => Some(product_id),
            Self::Other(_) => None,
        }
    }
}

/// An append-only purchase record owned by `user_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Username of the subject that placed the order.
    pub user_id: String,
    pub products: Vec<LineItem>,
    pub timestamp: DateTime<Utc>,
}

//! Catalog product types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry.
///
/// `id`, `name`, `price` and `link` are typed when the caller sends them as
/// strings. Every other attribute, and any of those four keys carrying a
/// non-string value, is kept verbatim in `extra` and written back flattened,
/// so a key lives in exactly one of the two places.
///
/// `external_id` is the caller- or scraper-supplied natural key (`id` on the
/// wire, `id_` accepted on input). It is not unique: two products may share it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Product {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Product {
    fn from(map: Map<String, Value>) -> Self {
        let KnownFields {
            external_id,
            name,
            price,
            link,
            extra,
        } = KnownFields::split(map);
        Self {
            external_id,
            name,
            price,
            link,
            extra,
        }
    }
}

/// Partial update for a [`Product`]. Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ProductPatch {
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub link: Option<String>,
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for ProductPatch {
    fn from(map: Map<String, Value>) -> Self {
        let KnownFields {
            external_id,
            name,
            price,
            link,
            extra,
        } = KnownFields::split(map);
        Self {
            external_id,
            name,
            price,
            link,
            extra,
        }
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.external_id.is_none()
            && self.name.is_none()
            && self.price.is_none()
            && self.link.is_none()
            && self.extra.is_empty()
    }
}

struct KnownFields {
    external_id: Option<String>,
    name: Option<String>,
    price: Option<String>,
    link: Option<String>,
    extra: Map<String, Value>,
}

impl KnownFields {
    fn split(mut extra: Map<String, Value>) -> Self {
        let external_id = if extra.contains_key("id") {
            take_string(&mut extra, "id")
        } else {
            take_string(&mut extra, "id_")
        };
        Self {
            external_id,
            name: take_string(&mut extra, "name"),
            price: take_string(&mut extra, "price"),
            link: take_string(&mut extra, "link"),
            extra,
        }
    }
}

/// Remove `key` from `map` only when it holds a string.
fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !map.get(key).is_some_and(Value::is_string) {
        return None;
    }
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

impl Product {
    /// Merge `patch` into `self`, keeping every field the patch does not mention.
    ///
    /// A patch value for a known key replaces the stored one whichever form
    /// (typed or `extra`) either side holds it in.
    pub fn merge(&mut self, patch: ProductPatch) {
        for (key, value) in patch.extra {
            match key.as_str() {
                "id" | "id_" => self.external_id = None,
                "name" => self.name = None,
                "price" => self.price = None,
                "link" => self.link = None,
                _ => {}
            }
            self.extra.insert(key, value);
        }
        if let Some(external_id) = patch.external_id {
            self.extra.remove("id");
            self.extra.remove("id_");
            self.external_id = Some(external_id);
        }
        if let Some(name) = patch.name {
            self.extra.remove("name");
            self.name = Some(name);
        }
        if let Some(price) = patch.price {
            self.extra.remove("price");
            self.price = Some(price);
        }
        if let Some(link) = patch.link {
            self.extra.remove("link");
            self.link = Some(link);
        }
    }
}

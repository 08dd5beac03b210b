//! Builder for catalog pages in the external store's markup.

const CONTAINER_CLASS: &str = "-mx-2 flex flex-wrap";
const CARD_CLASS: &str = "flex w-full flex-col p-2 md:w-1/2 lg:w-1/3";
const NAME_CLASS: &str = "src__LineClampGrid-sc-1r3bpf8-5 kAwYla";
const PRICE_CLASS: &str = "sc-aXZVg bZfWPp";
const LINK_CLASS: &str = "sc-aXZVg dyjyw";

/// One product card. Fields set to `None` are left out of the markup.
#[derive(Debug, Clone)]
pub struct CatalogCard {
    pub name: Option<String>,
    pub price: Option<String>,
    pub href: Option<String>,
}

impl CatalogCard {
    pub fn new(name: &str, price: &str, href: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            price: Some(price.to_owned()),
            href: Some(href.to_owned()),
        }
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn without_price(mut self) -> Self {
        self.price = None;
        self
    }

    pub fn without_link(mut self) -> Self {
        self.href = None;
        self
    }

    fn render(&self) -> String {
        let mut html = format!(r#"<div class="{CARD_CLASS}">"#);
        if let Some(href) = &self.href {
            html.push_str(&format!(r#"<a class="{LINK_CLASS}" href="{href}">"#));
        }
        if let Some(name) = &self.name {
            html.push_str(&format!(r#"<div class="{NAME_CLASS}">{name}</div>"#));
        }
        if self.href.is_some() {
            html.push_str("</a>");
        }
        if let Some(price) = &self.price {
            html.push_str(&format!(r#"<div class="{PRICE_CLASS}">{price}</div>"#));
        }
        html.push_str("</div>");
        html
    }
}

/// A full page whose product grid holds `cards`, in order.
pub fn catalog_page(cards: &[CatalogCard]) -> String {
    let grid: String = cards.iter().map(CatalogCard::render).collect();
    format!(
        r#"<!DOCTYPE html><html><head><title>Computing Peripherals</title></head><body><main><div class="{CONTAINER_CLASS}">{grid}</div></main></body></html>"#
    )
}

/// A page with the site chrome but no product grid.
pub fn empty_page() -> String {
    r#"<!DOCTYPE html><html><head><title>Computing Peripherals</title></head><body><main><p>No results</p></main></body></html>"#.to_owned()
}

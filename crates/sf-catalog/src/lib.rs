use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sf_api_types::{ProductsResponse, RawProduct};
use tracing::debug;

pub const CURRENCY_USD: &str = "USD";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    /// Display-only; titles may collide, so this is never used for lookups.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub old_price: i64,
    pub price_after_sale: i64,
    pub currency: String,
}

impl Product {
    pub fn from_raw(raw: &RawProduct) -> Self {
        let discount = raw.discount_percentage.unwrap_or(0.0);
        let price_after_sale = raw.price.round() as i64;

        Self {
            id: ProductId(raw.id),
            slug: slugify(&raw.title),
            title: raw.title.clone(),
            description: raw.description.clone(),
            image: raw.thumbnail.clone(),
            old_price: old_price(price_after_sale, discount),
            price_after_sale,
            currency: CURRENCY_USD.to_owned(),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.old_price > self.price_after_sale
    }
}

/// Back-compute the pre-sale price from a discount percentage.
///
/// Discounts outside `(0, 100)` leave the price unchanged.
pub fn old_price(price_after_sale: i64, discount_percentage: f64) -> i64 {
    if discount_percentage > 0.0 && discount_percentage < 100.0 {
        (price_after_sale as f64 / (1.0 - discount_percentage / 100.0)).round() as i64
    } else {
        price_after_sale
    }
}

/// Lowercase the title and replace each whitespace run with a single hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// Ordered product list, replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn from_response(response: &ProductsResponse) -> Self {
        let products: Vec<Product> = response.products.iter().map(Product::from_raw).collect();
        debug!(count = products.len(), "catalog built from response");
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog endpoint returned HTTP {0}")]
    Status(u16),
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Remote source of raw catalog data.
///
/// Futures are not required to be `Send` so browser fetch implementations fit.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_products(&self) -> Result<ProductsResponse, CatalogError>;
}

/// Serves a fixed response; useful for demos and tests.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    response: ProductsResponse,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<RawProduct>) -> Self {
        Self {
            response: ProductsResponse {
                products,
                total: None,
                skip: None,
                limit: None,
            },
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> Result<ProductsResponse, CatalogError> {
        Ok(self.response.clone())
    }
}

use serde::{Deserialize, Serialize};

pub const DUMMYJSON_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_CATEGORY: &str = "smartphones";
pub const DEFAULT_LIMIT: u32 = 8;

/// Category-scoped listing request against the products endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: String,
    pub limit: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_owned(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl CatalogQuery {
    /// Path and query string, relative to the API base URL.
    pub fn path(&self) -> String {
        format!("/products/category/{}?limit={}", self.category, self.limit)
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub price: f64,
    #[serde(default, rename = "discountPercentage")]
    pub discount_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    pub products: Vec<RawProduct>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

//! Catalog fetch over the browser's `fetch`.

use async_trait::async_trait;
use gloo_net::http::Request;
use sf_api_types::{CatalogQuery, DUMMYJSON_BASE_URL, ProductsResponse};
use sf_catalog::{CatalogError, CatalogSource};

pub struct BrowserCatalogSource {
    url: String,
}

impl Default for BrowserCatalogSource {
    fn default() -> Self {
        Self::new(DUMMYJSON_BASE_URL, CatalogQuery::default())
    }
}

impl BrowserCatalogSource {
    pub fn new(base_url: &str, query: CatalogQuery) -> Self {
        Self {
            url: query.url(base_url),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for BrowserCatalogSource {
    async fn fetch_products(&self) -> Result<ProductsResponse, CatalogError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(CatalogError::Status(response.status()));
        }

        response
            .json::<ProductsResponse>()
            .await
            .map_err(|err| CatalogError::Decode(err.to_string()))
    }
}

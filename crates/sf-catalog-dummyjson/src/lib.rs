use async_trait::async_trait;
use sf_api_types::{CatalogQuery, DUMMYJSON_BASE_URL, ProductsResponse};
use sf_catalog::{CatalogError, CatalogSource};
use tracing::{debug, warn};

/// HTTP catalog source for the DummyJSON products API.
///
/// One GET per call; no retry, no timeout beyond the client defaults.
pub struct DummyJsonSource {
    base_url: String,
    query: CatalogQuery,
    http: reqwest::Client,
}

impl Default for DummyJsonSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DummyJsonSource {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DUMMYJSON_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            query: CatalogQuery::default(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_query(mut self, query: CatalogQuery) -> Self {
        self.query = query;
        self
    }

    pub fn url(&self) -> String {
        self.query.url(&self.base_url)
    }
}

#[async_trait(?Send)]
impl CatalogSource for DummyJsonSource {
    async fn fetch_products(&self) -> Result<ProductsResponse, CatalogError> {
        let url = self.url();
        debug!(%url, "fetching catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "catalog endpoint returned non-success status");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        serde_json::from_str::<ProductsResponse>(&text)
            .map_err(|err| CatalogError::Decode(err.to_string()))
    }
}

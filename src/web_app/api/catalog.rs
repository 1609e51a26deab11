// web_app/api/catalog.rs - Remote book catalog client
//
// One GET returning the whole catalog as a JSON array. No paging, no
// retries. A process-wide client is installed at startup and picked up by
// the catalog server function.

use std::sync::{Mutex, OnceLock};

use super::config::AppConfig;
use crate::web_app::error::CatalogError;
use crate::web_app::model::{decode_records, CatalogBook};

static CLIENT: OnceLock<CatalogClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<CatalogClient>> = Mutex::new(None);

/// HTTP client for the books backend
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.catalog_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            url: config.catalog_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch every book in the catalog
    pub async fn fetch_books(&self) -> Result<Vec<CatalogBook>, CatalogError> {
        tracing::info!("Fetching catalog from {}", self.url);

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let records: Vec<serde_json::Value> = response.json().await?;
        let books: Vec<CatalogBook> = decode_records(records, "catalog");
        tracing::info!("Catalog returned {} books", books.len());
        Ok(books)
    }
}

/// Install the global catalog client
pub fn init_client(client: CatalogClient) {
    if CLIENT.set(client).is_err() {
        tracing::warn!("Catalog client already initialized");
    } else {
        tracing::info!("Global catalog client initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: CatalogClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the global catalog client
pub fn get_client() -> Option<CatalogClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global catalog client is empty!");
    }
    client
}

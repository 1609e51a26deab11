// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// This file must be compiled for BOTH ssr and hydrate features.

use leptos::prelude::*;
use crate::web_app::model::CatalogBook;

#[cfg(feature = "ssr")]
async fn client() -> Result<crate::web_app::api::catalog::CatalogClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::catalog::{self, CatalogClient};
    use crate::web_app::api::config::AppConfig;

    // Context first (tests), then the global client
    if let Some(client) = use_context::<CatalogClient>() {
        return Ok(client);
    }

    if let Some(client) = catalog::get_client() {
        return Ok(client);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(client) = req.app_data::<Data<CatalogClient>>() {
                return Ok(client.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    tracing::warn!("No catalog client installed, building one from the environment");
    CatalogClient::new(&AppConfig::from_env())
        .map_err(|e| ServerFnError::new(format!("Catalog client unavailable: {}", e)))
}

/// Fetch the full remote book catalog
#[server(FetchCatalog, "/api")]
pub async fn fetch_catalog() -> Result<Vec<CatalogBook>, ServerFnError> {
    let client = client().await?;

    let result = client.fetch_books().await;
    if let Err(e) = &result {
        tracing::error!("Error fetching books: {}", e);
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to fetch books: {}", e)))
}

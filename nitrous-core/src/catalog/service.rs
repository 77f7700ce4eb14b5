//! Catalog service
//!
//! Fetches catalog data through a [`NitrousApi`] and normalizes it into the
//! declared types.

use std::sync::Arc;

use tracing::debug;

use super::normalize::{normalize_categories, normalize_module_names, normalize_modules};
use super::{NitrousApi, OsintModule, RemoteResponse};
use crate::error::{CatalogError, TransportError};

/// Typed access to the Nitrous catalog
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn NitrousApi>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn NitrousApi>) -> Self {
        Self { api }
    }

    /// Name of the underlying API implementation
    pub fn backend_name(&self) -> &'static str {
        self.api.name()
    }

    /// Fetch all category names, in server order
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let raw = self.api.categories().await?;
        let categories = normalize_categories(raw, "categories")?;
        debug!(
            "Fetched {} categories via {}",
            categories.len(),
            self.api.name()
        );
        Ok(categories)
    }

    /// Fetch the module names for one category
    ///
    /// Non-array payloads become an empty list; only transport and status
    /// failures are errors.
    pub async fn get_modules_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<String>, CatalogError> {
        let raw = self.api.modules_by_category(category).await?;
        let modules = normalize_module_names(raw);
        debug!("Category '{}' has {} modules", category, modules.len());
        Ok(modules)
    }

    /// Fetch the full module index used by search
    ///
    /// Groups with no endpoints are returned as-is.
    pub async fn get_modules(&self) -> Result<Vec<OsintModule>, CatalogError> {
        let raw = self.api.modules().await?;
        let modules = normalize_modules(raw, "modules")?;
        debug!("Fetched {} module groups", modules.len());
        Ok(modules)
    }

    /// Send a query; any HTTP status is returned to the caller
    pub async fn query_module(
        &self,
        category: &str,
        module: &str,
        query_text: &str,
    ) -> Result<RemoteResponse, TransportError> {
        self.api.query(category, module, query_text).await
    }
}

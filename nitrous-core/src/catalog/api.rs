//! Nitrous API trait - Abstraction over the remote catalog service
//!
//! This trait allows swapping between implementations:
//! - HTTP (reqwest, `http` feature)
//! - Host-provided bridges (e.g. an embedding shell's own fetch)
//! - Mock (testing)

use async_trait::async_trait;
use serde_json::Value;

use super::RemoteResponse;
use crate::error::{CatalogError, TransportError};

/// Raw access to the Nitrous catalog and query endpoints
///
/// Implementations return payloads as loosely-typed JSON; shape checks happen
/// in [`super::CatalogService`], not here.
#[async_trait]
pub trait NitrousApi: Send + Sync {
    /// `GET categories`
    async fn categories(&self) -> Result<Value, CatalogError>;

    /// `GET modules?category=`
    ///
    /// An unreadable or empty body should come back as `Value::Null` rather
    /// than an error; only transport and HTTP status failures are errors.
    async fn modules_by_category(&self, category: &str) -> Result<Value, CatalogError>;

    /// `GET modules`
    async fn modules(&self) -> Result<Value, CatalogError>;

    /// `POST query`
    ///
    /// Any HTTP status is a successful transport; only connection-level
    /// failures are errors.
    async fn query(
        &self,
        category: &str,
        module: &str,
        query: &str,
    ) -> Result<RemoteResponse, TransportError>;

    /// Implementation identifier for logging/debugging
    fn name(&self) -> &'static str;
}

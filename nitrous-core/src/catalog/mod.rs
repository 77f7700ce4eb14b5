//! Nitrous Catalog - OSINT module discovery
//!
//! This module provides the catalog data model and the service that fetches
//! it from the Nitrous API.
//!
//! # Overview
//!
//! The catalog is exposed in two shapes:
//! - Category → module names, driving the cascading query form
//! - Category → endpoints ([`OsintModule`]), driving the search list
//!
//! # Architecture
//!
//! ```text
//! Nitrous API
//!     │
//!     ├── GET  /categories          ← category names
//!     ├── GET  /modules?category=C  ← module names for C (shape not guaranteed)
//!     ├── GET  /modules             ← OsintModule[]
//!     └── POST /query               ← {status, data}
//!            │
//!            ▼
//!     NitrousApi (trait) ── HttpApi (reqwest)
//!            │
//!            ▼
//!     normalize  ← the only place remote payloads are coerced
//!            │
//!            ▼
//!     CatalogService
//! ```

mod api;
#[cfg(feature = "http")]
mod http;
mod model;
mod normalize;
mod service;

pub use api::NitrousApi;
#[cfg(feature = "http")]
pub use http::HttpApi;
pub use model::{fold_case, Endpoint, OsintModule, QueryResult, RemoteResponse};
pub use normalize::{normalize_categories, normalize_module_names, normalize_modules};
pub use service::CatalogService;

#[cfg(test)]
pub(crate) use api::mock;

//! Catalog data model
//!
//! Shapes of the search-flow catalog (`OsintModule` / `Endpoint`) and of
//! query responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single OSINT endpoint within a module group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Display name; not guaranteed unique within a group
    #[serde(default)]
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Path on the browser host, usually with a leading `/`
    #[serde(default)]
    pub route: String,

    /// Endpoint type shown as an accessory (e.g. "email", "username")
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// A category and the endpoints it groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsintModule {
    pub category: String,

    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Raw answer of the query endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub status: u16,

    #[serde(default)]
    pub data: Value,
}

/// Structured data returned by a successful query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResult(Value);

/// Simple per-character lowercase fold
///
/// Each character folds independently of its neighbours, so the fold of a
/// prefix is always a prefix of the fold. Final sigma folds to `σ`.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

impl Endpoint {
    /// Case-insensitive match of `needle_folded` against name or description
    ///
    /// `needle_folded` must already have gone through [`fold_case`].
    pub fn matches(&self, needle_folded: &str) -> bool {
        fold_case(&self.name).contains(needle_folded)
            || fold_case(&self.description).contains(needle_folded)
    }

    /// URL that opens this endpoint on the browser host
    ///
    /// The route is not validated; a malformed route yields a malformed URL.
    pub fn browser_url(&self, host: &str) -> String {
        if self.route.starts_with('/') {
            format!("https://{}{}", host, self.route)
        } else {
            format!("https://{}/{}", host, self.route)
        }
    }
}

impl OsintModule {
    /// Look up an endpoint by name
    ///
    /// Names may repeat within a group; the first occurrence wins.
    pub fn endpoint(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl QueryResult {
    pub fn new(data: Value) -> Self {
        Self(data)
    }

    pub fn data(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Pretty-printed JSON with 2-space indentation
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl RemoteResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

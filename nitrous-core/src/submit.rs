//! Query submission
//!
//! Validates the selected category/module and query text, sends a single
//! request, and classifies the answer by status code. Successful results are
//! copied to the clipboard as pretty-printed JSON.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{CatalogService, QueryResult};
use crate::error::SubmissionError;
use crate::host::Clipboard;

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub result: QueryResult,

    /// Whether the pretty-printed result reached the clipboard
    pub copied_to_clipboard: bool,
}

/// Sends queries built from the current selection
#[derive(Clone)]
pub struct QuerySubmitter {
    service: CatalogService,
    clipboard: Arc<dyn Clipboard>,
}

impl QuerySubmitter {
    pub fn new(service: CatalogService, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { service, clipboard }
    }

    /// Submit a query
    ///
    /// Nothing is sent unless all three inputs are non-empty. There is no
    /// retry; the remote is called at most once.
    pub async fn submit(
        &self,
        category: &str,
        module: &str,
        query_text: &str,
    ) -> Result<Submission, SubmissionError> {
        validate(category, module, query_text)?;

        debug!(category, module, "Submitting query");
        let response = self
            .service
            .query_module(category, module, query_text)
            .await?;

        if !response.is_success() {
            warn!(
                category,
                module,
                status = response.status,
                "Query rejected by remote"
            );
            return Err(SubmissionError::HttpStatus {
                status: response.status,
            });
        }

        let result = QueryResult::new(response.data);
        let copied_to_clipboard = self.copy_to_clipboard(&result).await;

        info!(category, module, copied_to_clipboard, "Query successful");
        Ok(Submission {
            result,
            copied_to_clipboard,
        })
    }

    async fn copy_to_clipboard(&self, result: &QueryResult) -> bool {
        let text = match result.to_pretty_json() {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to render query result for clipboard: {}", e);
                return false;
            }
        };

        match self.clipboard.copy(&text).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to copy query result to clipboard: {}", e);
                false
            }
        }
    }
}

fn validate(category: &str, module: &str, query_text: &str) -> Result<(), SubmissionError> {
    let missing = [
        ("category", category),
        ("module", module),
        ("query", query_text),
    ]
    .into_iter()
    .find(|(_, value)| value.is_empty());

    match missing {
        Some((field, _)) => Err(SubmissionError::Validation { field }),
        None => Ok(()),
    }
}

//! Session flows
//!
//! [`QuerySession`] drives the query form (category → module → query →
//! submit → save). [`SearchSession`] drives the searchable module list.
//!
//! Each public action is the boundary for its own errors: failures become a
//! [`Notification`] and the session stays usable, selections intact.

use std::borrow::Cow;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::catalog::{CatalogService, Endpoint, OsintModule, QueryResult};
use crate::error::{CatalogError, SelectorError, SubmissionError};
use crate::filter::FilterEngine;
use crate::host::{Clipboard, UrlOpener};
use crate::notify::{Notification, NotificationSink};
use crate::persist::{Clock, FileArtifact, ResultPersister, SystemClock};
use crate::selector::{CascadeSelector, Completion, SelectorState};
use crate::submit::QuerySubmitter;

const LOAD_DATA_HINT: &str = "Check your internet connection or try again later.";

/// Read-only view of the query form, for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub categories: Vec<String>,
    pub category: Option<String>,
    pub state: SelectorState,
    pub modules: Vec<String>,
    pub module: Option<String>,
    pub query_text: String,
    pub has_result: bool,
}

struct FormState {
    categories: Vec<String>,
    selector: CascadeSelector,
    query_text: String,
    /// Last successful result and the query text it was submitted with
    result: Option<(QueryResult, String)>,
}

/// Query form: cascading selection, submission and saving
pub struct QuerySession {
    service: CatalogService,
    submitter: QuerySubmitter,
    persister: ResultPersister,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn NotificationSink>,
    state: Mutex<FormState>,
}

impl QuerySession {
    pub fn new(
        service: CatalogService,
        clipboard: Arc<dyn Clipboard>,
        persister: ResultPersister,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            submitter: QuerySubmitter::new(service.clone(), clipboard),
            service,
            persister,
            clock: Arc::new(SystemClock),
            sink,
            state: Mutex::new(FormState {
                categories: Vec::new(),
                selector: CascadeSelector::new(),
                query_text: String::new(),
                result: None,
            }),
        }
    }

    /// Replace the clock used to timestamp saved results
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch the category list
    ///
    /// On failure the previous list is kept and a notification is sent.
    pub async fn load_categories(&self) -> Vec<String> {
        match self.service.fetch_categories().await {
            Ok(categories) => {
                let mut state = self.state.lock().await;
                state.categories = categories.clone();
                categories
            }
            Err(e) => {
                warn!("Failed to load categories: {}", e);
                self.sink
                    .notify(Notification::failure("Error", "Failed to load categories"));
                self.state.lock().await.categories.clone()
            }
        }
    }

    /// Choose a category and load its modules
    ///
    /// Overlapping calls are allowed; the most recently started one decides
    /// the final module list.
    pub async fn select_category(&self, category: &str) {
        let request = self.state.lock().await.selector.select_category(category);

        let outcome = self
            .service
            .get_modules_by_category(request.category())
            .await;

        let completion = self.state.lock().await.selector.complete(request, outcome);
        match completion {
            Completion::Applied => {}
            Completion::Stale => debug!("Module list for '{}' superseded", category),
            Completion::Failed(e) => {
                warn!("Failed to load modules for '{}': {}", category, e);
                self.sink.notify(Notification::failure(
                    "Error",
                    "Failed to load modules for the selected category",
                ));
            }
        }
    }

    /// Choose a module from the current category's list
    pub async fn select_module(&self, module: &str) -> Result<(), SelectorError> {
        self.state.lock().await.selector.select_module(module)
    }

    pub async fn set_query_text(&self, text: &str) {
        self.state.lock().await.query_text = text.to_string();
    }

    /// Submit the current selection and query text
    ///
    /// A successful result replaces the previous one. Failures leave the
    /// previous result and all selections untouched.
    pub async fn submit(&self) -> Result<QueryResult, SubmissionError> {
        let (category, module, query_text) = {
            let state = self.state.lock().await;
            (
                state.selector.category().unwrap_or_default().to_string(),
                state.selector.selected_module().unwrap_or_default().to_string(),
                state.query_text.clone(),
            )
        };

        match self.submitter.submit(&category, &module, &query_text).await {
            Ok(submission) => {
                if submission.copied_to_clipboard {
                    self.sink.notify(Notification::success(
                        "Query Successful",
                        "Results copied to clipboard",
                    ));
                } else {
                    self.sink.notify(Notification::failure(
                        "Error",
                        "Failed to copy results to clipboard",
                    ));
                }
                self.state.lock().await.result =
                    Some((submission.result.clone(), query_text));
                Ok(submission.result)
            }
            Err(e) => {
                let notification = match &e {
                    SubmissionError::Validation { .. } => Notification::failure(
                        "Error",
                        "Please fill out all fields before submitting",
                    ),
                    SubmissionError::HttpStatus { .. } => {
                        Notification::failure("Error", e.to_string())
                    }
                    SubmissionError::Transport { message } => {
                        Notification::failure("Query Failed", message.clone())
                    }
                };
                self.sink.notify(notification);
                Err(e)
            }
        }
    }

    /// Save the last successful result to the downloads directory
    ///
    /// Returns `None` when there is nothing to save or the write failed.
    pub async fn save_results(&self) -> Option<FileArtifact> {
        let (result, query_text) = self.state.lock().await.result.clone()?;

        match self
            .persister
            .persist(&result, &query_text, self.clock.as_ref())
            .await
        {
            Ok(artifact) => {
                self.sink.notify(Notification::success(
                    "Results Saved",
                    "Results saved to Downloads",
                ));
                Some(artifact)
            }
            Err(e) => {
                warn!("Failed to save results: {}", e);
                self.sink
                    .notify(Notification::failure("Error", "Failed to save results"));
                None
            }
        }
    }

    /// Last result as a fenced JSON block for display
    pub async fn results_markdown(&self) -> Option<String> {
        let state = self.state.lock().await;
        let (result, _) = state.result.as_ref()?;
        let pretty = result.to_pretty_json().ok()?;
        Some(format!("```\n{pretty}\n```"))
    }

    pub async fn result(&self) -> Option<QueryResult> {
        self.state
            .lock()
            .await
            .result
            .as_ref()
            .map(|(result, _)| result.clone())
    }

    pub async fn snapshot(&self) -> SelectionSnapshot {
        let state = self.state.lock().await;
        SelectionSnapshot {
            categories: state.categories.clone(),
            category: state.selector.category().map(str::to_string),
            state: state.selector.state(),
            modules: state.selector.modules().to_vec(),
            module: state.selector.selected_module().map(str::to_string),
            query_text: state.query_text.clone(),
            has_result: state.result.is_some(),
        }
    }
}

/// Searchable list of catalog endpoints
pub struct SearchSession {
    service: CatalogService,
    opener: Arc<dyn UrlOpener>,
    sink: Arc<dyn NotificationSink>,
    browser_host: String,
    modules: Vec<OsintModule>,
    search_text: String,
    loading: bool,
}

impl SearchSession {
    pub fn new(
        service: CatalogService,
        opener: Arc<dyn UrlOpener>,
        sink: Arc<dyn NotificationSink>,
        browser_host: impl Into<String>,
    ) -> Self {
        Self {
            service,
            opener,
            sink,
            browser_host: browser_host.into(),
            modules: Vec::new(),
            search_text: String::new(),
            loading: true,
        }
    }

    /// Fetch the module index; loading ends whether or not it succeeds
    pub async fn load(&mut self) {
        match self.service.get_modules().await {
            Ok(modules) => self.modules = modules,
            Err(e) => {
                warn!("Failed to load module index: {}", e);
                let message = match &e {
                    CatalogError::Transport { .. } => LOAD_DATA_HINT.to_string(),
                    _ => e.to_string(),
                };
                self.sink
                    .notify(Notification::failure("Failed to load data", message));
            }
        }
        self.loading = false;
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Modules matching the current search text
    pub fn results(&self) -> Cow<'_, [OsintModule]> {
        FilterEngine::filter(&self.modules, &self.search_text)
    }

    /// True when loading finished and nothing matches ("No results found")
    pub fn shows_empty_view(&self) -> bool {
        !self.loading && self.results().is_empty()
    }

    /// Open an endpoint in the browser; returns the URL that was opened
    pub async fn open_endpoint(&self, endpoint: &Endpoint) -> Option<String> {
        let url = endpoint.browser_url(&self.browser_host);
        match self.opener.open(&url).await {
            Ok(()) => Some(url),
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.sink
                    .notify(Notification::failure("Error", "Failed to open module"));
                None
            }
        }
    }
}

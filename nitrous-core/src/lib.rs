//! Nitrous core library exports
//!
//! Catalog model, search filtering, cascading category/module selection,
//! query submission and result persistence for the Nitrous OSINT API.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod host;
pub mod logging;
pub mod notify;
pub mod persist;
pub mod selector;
pub mod session;
pub mod submit;

pub use catalog::{CatalogService, Endpoint, NitrousApi, OsintModule, QueryResult, RemoteResponse};
pub use config::{ApiConfig, NitrousConfig};
pub use error::{CatalogError, PersistenceError, SelectorError, SubmissionError, TransportError};
pub use filter::FilterEngine;
pub use notify::{Notification, NotificationSink, NotificationStyle};
pub use persist::{Clock, FileArtifact, FixedClock, ResultPersister, SystemClock};
pub use selector::{CascadeSelector, Completion, ModuleRequest, SelectorState};
pub use session::{QuerySession, SearchSession, SelectionSnapshot};
pub use submit::{QuerySubmitter, Submission};

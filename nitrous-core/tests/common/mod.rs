//! Test helpers shared by the integration tests
//!
//! Provides a scriptable in-memory Nitrous API (with per-category gates for
//! controlling completion order), recording host collaborators, and logging.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use nitrous_core::error::{CatalogError, TransportError};
use nitrous_core::host::{Clipboard, UrlOpener};
use nitrous_core::{NitrousApi, RemoteResponse};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use tokio::sync::oneshot;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// In-memory Nitrous API
///
/// Module lists come from `catalog`; a category with a registered gate waits
/// for the gate's value instead.
#[derive(Default)]
pub struct ScriptedApi {
    pub categories: Option<Value>,
    pub catalog: HashMap<String, Value>,
    pub modules: Option<Value>,
    pub query_response: Option<RemoteResponse>,
    gates: Mutex<HashMap<String, oneshot::Receiver<Value>>>,
    module_list_calls: AtomicUsize,
    query_calls: AtomicUsize,
}

impl ScriptedApi {
    /// Build from a category → module names map
    pub fn with_catalog(entries: &[(&str, Value)]) -> Self {
        let catalog: HashMap<String, Value> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let categories = Value::Array(
            entries
                .iter()
                .map(|(k, _)| Value::String(k.to_string()))
                .collect(),
        );

        Self {
            categories: Some(categories),
            catalog,
            ..Default::default()
        }
    }

    /// Serve `index` from the module index endpoint
    pub fn with_modules(index: Value) -> Self {
        Self {
            modules: Some(index),
            ..Default::default()
        }
    }

    /// Hold the module list for `category` until the returned sender fires
    pub fn gate(&self, category: &str) -> oneshot::Sender<Value> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert(category.to_string(), rx);
        tx
    }

    pub fn module_list_calls(&self) -> usize {
        self.module_list_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }
}

fn offline(url: &str) -> CatalogError {
    CatalogError::Transport {
        url: url.to_string(),
        message: "offline".to_string(),
    }
}

#[async_trait]
impl NitrousApi for ScriptedApi {
    async fn categories(&self) -> Result<Value, CatalogError> {
        self.categories
            .clone()
            .ok_or_else(|| offline("scripted://categories"))
    }

    async fn modules_by_category(&self, category: &str) -> Result<Value, CatalogError> {
        self.module_list_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().remove(category);
        if let Some(rx) = gate {
            return rx.await.map_err(|_| offline("scripted://modules"));
        }

        Ok(self.catalog.get(category).cloned().unwrap_or(Value::Null))
    }

    async fn modules(&self) -> Result<Value, CatalogError> {
        self.modules.clone().ok_or_else(|| offline("scripted://modules"))
    }

    async fn query(
        &self,
        _category: &str,
        _module: &str,
        _query: &str,
    ) -> Result<RemoteResponse, TransportError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.query_response
            .clone()
            .ok_or_else(|| TransportError::new("offline"))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Clipboard that records every copy
#[derive(Default)]
pub struct RecordingClipboard {
    copies: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn copy(&self, text: &str) -> Result<()> {
        self.copies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Opener that records every URL
#[derive(Default)]
pub struct RecordingOpener {
    urls: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open(&self, url: &str) -> Result<()> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

//! Saving query results to disk
//!
//! Results are written as pretty-printed JSON to the downloads directory
//! under `{query}-{timestamp}.json`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::catalog::QueryResult;
use crate::error::PersistenceError;

/// Source of the current time for artifact names
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A written result file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes_written: usize,
}

/// Writes query results into a downloads directory
#[derive(Debug, Clone)]
pub struct ResultPersister {
    downloads_dir: PathBuf,
}

impl ResultPersister {
    pub fn new(downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloads_dir: downloads_dir.into(),
        }
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    /// Write `result` as `{query_text}-{timestamp}.json`
    ///
    /// The directory must already exist. An existing file with the same name
    /// is overwritten.
    pub async fn persist(
        &self,
        result: &QueryResult,
        query_text: &str,
        clock: &dyn Clock,
    ) -> Result<FileArtifact, PersistenceError> {
        let file_name = artifact_file_name(query_text, clock.now());
        let path = self.downloads_dir.join(&file_name);

        let content = result
            .to_pretty_json()
            .map_err(|source| PersistenceError::Serialize { source })?;

        tokio::fs::write(&path, content.as_bytes())
            .await
            .map_err(|source| PersistenceError::Write {
                path: path.clone(),
                source,
            })?;

        info!("Saved query result to {}", path.display());
        Ok(FileArtifact {
            path,
            file_name,
            bytes_written: content.len(),
        })
    }
}

/// `{query_text}-{ISO 8601 with ':' → '-'}.json`
///
/// Path separators in the query are replaced so the file stays inside the
/// downloads directory.
pub fn artifact_file_name(query_text: &str, at: DateTime<Utc>) -> String {
    let timestamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-");
    let stem: String = query_text
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();

    format!("{stem}-{timestamp}.json")
}

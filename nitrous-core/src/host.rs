//! Host collaborators
//!
//! The embedding shell provides clipboard access and a way to open URLs.
//! Both are write-only from the library's point of view.

use anyhow::Result;
use async_trait::async_trait;

/// Write-only clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn copy(&self, text: &str) -> Result<()>;
}

/// Opens a URL in the user's browser
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

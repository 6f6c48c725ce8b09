//! Core trait for anything that can produce the full perk collection.
//!
//! The listing page is generic over this trait so the backend can be a live
//! HTTP service, a file on disk, or a scripted source in tests.

use crate::error::Result;
use crate::parser;
use crate::types::PerkCollection;
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

/// A source of the complete public perk collection.
///
/// ## Contract
/// - Each call to `fetch_all` performs exactly one load; no retries, no polling
/// - `Send + Sync` so a source can be shared with a spawned activation task
pub trait PerkSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Load every public perk.
    fn fetch_all(&self) -> impl Future<Output = Result<PerkCollection>> + Send;
}

/// Reads the collection from a JSON file with the same shape the backend serves.
#[derive(Debug, Clone)]
pub struct FilePerkSource {
    path: PathBuf,
}

impl FilePerkSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PerkSource for FilePerkSource {
    fn name(&self) -> &str {
        "FilePerkSource"
    }

    async fn fetch_all(&self) -> Result<PerkCollection> {
        debug!("Reading perks from {}", self.path.display());
        parser::load_from_file(&self.path).await
    }
}

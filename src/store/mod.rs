//! Index persistence and the read-only record snapshot served at query time.

pub mod registry;

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::Result;
use crate::models::artifact::ArtifactRecord;
use crate::models::index::ArtifactIndex;

/// Write the index document to disk, creating parent directories as needed.
///
/// Unlike per-file extraction failures, a failure here propagates: producing
/// this document is the whole point of an indexing run.
pub fn write_index(path: &Path, index: &ArtifactIndex) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(index)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read and deserialize an index document. Strict: errors propagate.
pub fn read_index(path: &Path) -> Result<ArtifactIndex> {
    let content = std::fs::read_to_string(path)?;
    let index: ArtifactIndex = serde_json::from_str(&content)?;
    Ok(index)
}

/// Immutable snapshot of the record set, loaded once per process.
///
/// Queries against it never fail; an absent or corrupt index degrades to an
/// empty snapshot with a diagnostic on stderr.
#[derive(Debug, Default)]
pub struct Store {
    records: Vec<ArtifactRecord>,
    generated_at: Option<DateTime<Utc>>,
}

impl Store {
    /// Load a snapshot from a generated index file.
    #[must_use]
    pub fn load(index_path: &Path) -> Self {
        match read_index(index_path) {
            Ok(index) => {
                if !index.is_consistent() {
                    warn!(
                        count = index.count,
                        actual = index.artifacts.len(),
                        "index count does not match artifact list"
                    );
                }
                Self {
                    records: index.artifacts,
                    generated_at: Some(index.generated_at),
                }
            }
            Err(e) => {
                warn!(path = %index_path.display(), error = %e, "index unavailable, serving empty set");
                Self::default()
            }
        }
    }

    /// Build a snapshot directly from records (tests, in-process indexing).
    #[must_use]
    pub fn from_records(records: Vec<ArtifactRecord>) -> Self {
        Self {
            records,
            generated_at: None,
        }
    }

    /// All records in stored (display name) order.
    #[must_use]
    pub fn records(&self) -> &[ArtifactRecord] {
        &self.records
    }

    /// Exact-id lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ArtifactRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

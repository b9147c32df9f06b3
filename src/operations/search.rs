//! Gallery filter logic: free-text query, tag and type intersection.

use serde::Serialize;

use crate::models::artifact::ArtifactRecord;
use crate::store::Store;

/// Filter criteria; all present criteria must match.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring matched against name, description and tags.
    pub query: Option<String>,
    /// Every listed tag must be present on the record (exact tag equality).
    pub tags: Vec<String>,
    /// Exact type match.
    pub artifact_type: Option<String>,
}

/// Filtered record set.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub results: Vec<ArtifactRecord>,
    pub total: usize,
}

/// Filter the record set. Order of the store snapshot is preserved.
#[must_use]
pub fn search(store: &Store, filter: &SearchFilter) -> SearchResult {
    let results: Vec<ArtifactRecord> = store
        .records()
        .iter()
        .filter(|r| matches(r, filter))
        .cloned()
        .collect();
    SearchResult {
        total: results.len(),
        results,
    }
}

fn matches(record: &ArtifactRecord, filter: &SearchFilter) -> bool {
    if let Some(query) = &filter.query {
        let q = query.to_lowercase();
        let hit = record.name.to_lowercase().contains(&q)
            || record.description.to_lowercase().contains(&q)
            || record.tags.iter().any(|t| t.to_lowercase().contains(&q));
        if !hit {
            return false;
        }
    }

    if let Some(ty) = &filter.artifact_type {
        if &record.artifact_type != ty {
            return false;
        }
    }

    filter
        .tags
        .iter()
        .all(|wanted| record.tags.iter().any(|t| t == wanted))
}

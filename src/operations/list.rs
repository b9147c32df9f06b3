use serde::Serialize;

use crate::models::artifact::ArtifactRecord;
use crate::store::Store;

/// Full record set, order as stored (by display name).
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    pub artifacts: Vec<ArtifactRecord>,
    pub count: usize,
}

/// List every artifact. Never fails; an unavailable source shows as empty.
#[must_use]
pub fn list_all(store: &Store) -> ListResult {
    let artifacts = store.records().to_vec();
    ListResult {
        count: artifacts.len(),
        artifacts,
    }
}

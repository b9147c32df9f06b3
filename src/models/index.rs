use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::artifact::ArtifactRecord;

/// The generated index document: the sole durable contract between the
/// indexer and the query layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactIndex {
    /// All indexed artifacts, sorted by display name.
    pub artifacts: Vec<ArtifactRecord>,
    /// When this index was generated.
    pub generated_at: DateTime<Utc>,
    /// Must always equal `artifacts.len()`.
    pub count: usize,
}

impl ArtifactIndex {
    /// Wrap a record list, stamping the generation time and count.
    #[must_use]
    pub fn new(artifacts: Vec<ArtifactRecord>) -> Self {
        let count = artifacts.len();
        Self {
            artifacts,
            generated_at: Utc::now(),
            count,
        }
    }

    /// Whether the stored count matches the actual artifact list.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.count == self.artifacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_index_counts_artifacts() {
        let index = ArtifactIndex::new(vec![]);
        assert_eq!(index.count, 0);
        assert!(index.is_consistent());
    }

    #[test]
    fn index_serializes_generated_at_camel_case() {
        let index = ArtifactIndex::new(vec![]);
        let json = serde_json::to_string(&index).unwrap();
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"count\":0"));
        assert!(json.contains("\"artifacts\":[]"));
    }

    #[test]
    fn inconsistent_count_detected() {
        let mut index = ArtifactIndex::new(vec![]);
        index.count = 3;
        assert!(!index.is_consistent());
    }
}

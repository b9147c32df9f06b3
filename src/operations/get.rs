use serde::Serialize;
use tracing::warn;

use crate::models::artifact::ArtifactRecord;
use crate::store::Store;

/// Outcome of an exact-id lookup. "Not found" is a result, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct GetResult {
    pub id: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactRecord>,
}

/// Linear search by exact id equality; no partial or fuzzy matching.
#[must_use]
pub fn get_by_id(store: &Store, id: &str) -> GetResult {
    match store.get(id) {
        Some(record) => GetResult {
            id: id.to_string(),
            found: true,
            artifact: Some(record.clone()),
        },
        None => {
            warn!(id, "artifact not found");
            GetResult {
                id: id.to_string(),
                found: false,
                artifact: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::record;

    #[test]
    fn get_existing_id() {
        let store = Store::from_records(vec![record("bar-chart", "Bar Chart")]);
        let result = get_by_id(&store, "bar-chart");
        assert!(result.found);
        assert_eq!(result.artifact.unwrap().name, "Bar Chart");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = Store::from_records(vec![record("bar-chart", "Bar Chart")]);
        let result = get_by_id(&store, "nope");
        assert!(!result.found);
        assert!(result.artifact.is_none());
    }

    #[test]
    fn get_requires_exact_match() {
        let store = Store::from_records(vec![record("bar-chart", "Bar Chart")]);
        assert!(!get_by_id(&store, "bar").found);
        assert!(!get_by_id(&store, "BAR-CHART").found);
    }

    #[test]
    fn not_found_serialization_omits_artifact() {
        let result = get_by_id(&Store::default(), "ghost");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"found\":false"));
        assert!(!json.contains("\"artifact\""));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indexed gallery artifact.
///
/// Produced fresh on every indexing run; read-only once loaded at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    /// Stable identifier derived from the filename (lowercase, hyphenated).
    pub id: String,
    /// Human-readable display title.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Single classification string ("visualization", "data-display", ...).
    #[serde(rename = "type")]
    pub artifact_type: String,
    /// Free-text labels. Always present, possibly empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source file location relative to the scan root (forward slashes).
    pub path: String,
    /// File creation time at indexing.
    pub created_at: DateTime<Utc>,
    /// File modification time at indexing.
    pub updated_at: DateTime<Utc>,
}

/// Intended metadata for a new artifact, lacking id and timestamps.
///
/// Input to the creation stub; no file is written for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub artifact_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> ArtifactRecord {
        ArtifactRecord {
            id: "bar-chart".into(),
            name: "Bar Chart".into(),
            description: "Bar Chart component".into(),
            artifact_type: "visualization".into(),
            tags: vec!["chart".into()],
            path: "bar-chart.jsx".into(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"type\":\"visualization\""));
        assert!(json.contains("\"createdAt\":\"2025-01-02T03:04:05Z\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("artifact_type"));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: ArtifactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn missing_tags_field_deserializes_to_empty_vec() {
        let json = r#"{
            "id": "x", "name": "X", "description": "X component",
            "type": "component", "path": "x.jsx",
            "createdAt": "2025-01-02T03:04:05Z",
            "updatedAt": "2025-01-02T03:04:05Z"
        }"#;
        let record: ArtifactRecord = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
    }
}

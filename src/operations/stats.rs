use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::Store;

/// Gallery summary: record count plus type and tag distributions.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResult {
    pub artifacts: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    pub types: Vec<LabelCount>,
    pub tags: Vec<LabelCount>,
}

/// A label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Summarize the loaded record set.
#[must_use]
pub fn gallery_stats(store: &Store) -> StatsResult {
    let mut types: BTreeMap<&str, usize> = BTreeMap::new();
    let mut tags: BTreeMap<&str, usize> = BTreeMap::new();
    for record in store.records() {
        *types.entry(record.artifact_type.as_str()).or_default() += 1;
        for tag in &record.tags {
            *tags.entry(tag.as_str()).or_default() += 1;
        }
    }

    StatsResult {
        artifacts: store.len(),
        generated_at: store.generated_at(),
        types: to_counts(types),
        tags: to_counts(tags),
    }
}

/// Highest count first; alphabetical within equal counts.
fn to_counts(map: BTreeMap<&str, usize>) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = map
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::record_with;

    #[test]
    fn stats_count_types_and_tags() {
        let store = Store::from_records(vec![
            record_with("a", "A", "visualization", &["chart"]),
            record_with("b", "B", "visualization", &["chart", "3d"]),
            record_with("c", "C", "input", &["form"]),
        ]);
        let stats = gallery_stats(&store);
        assert_eq!(stats.artifacts, 3);

        assert_eq!(stats.types[0].label, "visualization");
        assert_eq!(stats.types[0].count, 2);
        assert_eq!(stats.types[1].label, "input");

        assert_eq!(stats.tags[0].label, "chart");
        assert_eq!(stats.tags[0].count, 2);
    }

    #[test]
    fn equal_counts_sort_alphabetically() {
        let store = Store::from_records(vec![
            record_with("a", "A", "zeta", &[]),
            record_with("b", "B", "alpha", &[]),
        ]);
        let stats = gallery_stats(&store);
        assert_eq!(stats.types[0].label, "alpha");
        assert_eq!(stats.types[1].label, "zeta");
    }

    #[test]
    fn empty_store_has_empty_stats() {
        let stats = gallery_stats(&Store::default());
        assert_eq!(stats.artifacts, 0);
        assert!(stats.types.is_empty());
        assert!(stats.tags.is_empty());
        assert!(stats.generated_at.is_none());
    }
}

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::ingest::extractor;
use crate::ingest::scanner::Scanner;
use crate::models::artifact::ArtifactRecord;
use crate::models::index::ArtifactIndex;
use crate::store;

/// Statistics from an indexing run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexResult {
    pub files_scanned: usize,
    pub files_indexed: usize,
    /// Total files skipped (sum of all skip categories).
    pub files_skipped: usize,
    /// Files skipped due to IO errors.
    #[serde(skip_serializing_if = "is_zero")]
    pub skipped_io_error: usize,
    /// Files skipped because content is not valid UTF-8.
    #[serde(skip_serializing_if = "is_zero")]
    pub skipped_non_utf8: usize,
    /// Identifier collisions resolved by auto-suffixing.
    #[serde(skip_serializing_if = "is_zero")]
    pub duplicate_ids: usize,
    /// Where the index document was written.
    pub output_path: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde's skip_serializing_if
fn is_zero(v: &usize) -> bool {
    *v == 0
}

/// Run the indexer: scan the gallery, extract metadata, write the index.
///
/// Per-file failures are logged and skipped; only a failure to write the
/// output document propagates as an error.
pub fn run_index(config: &Config) -> Result<IndexResult> {
    info!(root = %config.scan_root.display(), "building artifacts index");

    let scanner = Scanner::new(config);
    let scanned = scanner.scan()?;

    let mut result = IndexResult {
        files_scanned: scanned.len(),
        output_path: config.output_path.to_string_lossy().into_owned(),
        ..Default::default()
    };

    let mut records: Vec<ArtifactRecord> = Vec::with_capacity(scanned.len());
    for file in &scanned {
        info!(path = %file.relative_path, "processing artifact");

        let meta = match file.path.metadata() {
            Ok(m) => m,
            Err(e) => {
                warn!(path = %file.relative_path, error = %e, "cannot stat file, skipping");
                result.files_skipped += 1;
                result.skipped_io_error += 1;
                continue;
            }
        };
        let modified = meta
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());
        let created = meta.created().map(DateTime::<Utc>::from).unwrap_or(modified);

        let bytes = match std::fs::read(&file.path) {
            Ok(b) => b,
            Err(e) => {
                warn!(path = %file.relative_path, error = %e, "cannot read file, skipping");
                result.files_skipped += 1;
                result.skipped_io_error += 1;
                continue;
            }
        };
        let content = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(_) => {
                warn!(path = %file.relative_path, "content is not valid UTF-8, skipping");
                result.files_skipped += 1;
                result.skipped_non_utf8 += 1;
                continue;
            }
        };

        records.push(extractor::extract(
            &file.relative_path,
            &content,
            created,
            modified,
            &config.settings.default_type,
        ));
        result.files_indexed += 1;
    }

    result.duplicate_ids = resolve_id_collisions(&mut records);

    // Stable order across runs: display name, then path as tie-breaker.
    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

    let index = ArtifactIndex::new(records);
    store::write_index(&config.output_path, &index)?;

    info!(
        count = index.count,
        output = %config.output_path.display(),
        "artifacts index generated"
    );
    Ok(result)
}

/// Auto-suffix duplicate ids (`-2`, `-3`, ...) in traversal order.
///
/// Records arrive sorted by relative path, so the suffix assignment is
/// deterministic given identical inputs. Returns the number of renames.
fn resolve_id_collisions(records: &mut [ArtifactRecord]) -> usize {
    let mut seen: HashSet<String> = HashSet::new();
    let mut renamed = 0;
    for record in records.iter_mut() {
        if seen.insert(record.id.clone()) {
            continue;
        }
        let mut n = 2;
        let mut candidate = format!("{}-{n}", record.id);
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}-{n}", record.id);
        }
        warn!(id = %record.id, renamed = %candidate, "duplicate artifact id");
        seen.insert(candidate.clone());
        record.id = candidate;
        renamed += 1;
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn gallery(tmp: &TempDir) -> std::path::PathBuf {
        let dir = tmp.path().join("artifacts");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn index_two_component_files() {
        let tmp = TempDir::new().unwrap();
        let dir = gallery(&tmp);
        fs::write(dir.join("bar-chart.jsx"), "export default () => <svg/>;").unwrap();
        fs::write(
            dir.join("data-table.jsx"),
            "/** @title Users Table\n * @tags data,table */",
        )
        .unwrap();

        let config = Config::new(tmp.path());
        let result = run_index(&config).unwrap();
        assert_eq!(result.files_scanned, 2);
        assert_eq!(result.files_indexed, 2);
        assert_eq!(result.files_skipped, 0);
        assert!(config.index_exists());

        let index = store::read_index(&config.output_path).unwrap();
        assert!(index.is_consistent());
        assert_eq!(index.count, 2);

        // Sorted by display name: "Bar Chart" < "Users Table".
        assert_eq!(index.artifacts[0].name, "Bar Chart");
        assert_eq!(index.artifacts[0].artifact_type, "component");
        assert_eq!(index.artifacts[1].name, "Users Table");
        assert_eq!(index.artifacts[1].tags, vec!["data", "table"]);
    }

    #[test]
    fn missing_scan_root_produces_empty_index() {
        let tmp = TempDir::new().unwrap();
        let config = Config::new(tmp.path());
        let result = run_index(&config).unwrap();
        assert_eq!(result.files_scanned, 0);

        let index = store::read_index(&config.output_path).unwrap();
        assert_eq!(index.count, 0);
        assert!(index.artifacts.is_empty());
    }

    #[test]
    fn non_utf8_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let dir = gallery(&tmp);
        fs::write(dir.join("good.jsx"), "export default 1;").unwrap();
        fs::write(dir.join("binary.jsx"), [0xFF, 0xFE, 0x00, 0x01]).unwrap();

        let config = Config::new(tmp.path());
        let result = run_index(&config).unwrap();
        assert_eq!(result.files_indexed, 1);
        assert_eq!(result.skipped_non_utf8, 1);
        assert_eq!(result.files_skipped, 1);

        let index = store::read_index(&config.output_path).unwrap();
        assert_eq!(index.count, 1);
        assert_eq!(index.artifacts[0].id, "good");
    }

    #[test]
    fn rerun_produces_identical_ordering() {
        let tmp = TempDir::new().unwrap();
        let dir = gallery(&tmp);
        fs::write(dir.join("zeta.jsx"), "").unwrap();
        fs::write(dir.join("alpha.jsx"), "").unwrap();
        fs::write(dir.join("MidWidget.jsx"), "").unwrap();

        let config = Config::new(tmp.path());
        run_index(&config).unwrap();
        let first = store::read_index(&config.output_path).unwrap();
        run_index(&config).unwrap();
        let second = store::read_index(&config.output_path).unwrap();

        let names: Vec<&str> = first.artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid Widget", "Zeta"]);
        assert_eq!(first.artifacts, second.artifacts);
    }

    #[test]
    fn duplicate_ids_are_suffixed() {
        let tmp = TempDir::new().unwrap();
        let dir = gallery(&tmp);
        // Same stem in root and in a subdirectory: same derived id.
        fs::write(dir.join("widget.jsx"), "").unwrap();
        let nested = dir.join("extra");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("widget.jsx"), "").unwrap();

        let config = Config::new(tmp.path());
        let result = run_index(&config).unwrap();
        assert_eq!(result.duplicate_ids, 1);

        let index = store::read_index(&config.output_path).unwrap();
        let mut ids: Vec<&str> = index.artifacts.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["widget", "widget-2"]);
    }

    #[test]
    fn output_parent_dirs_are_created() {
        let tmp = TempDir::new().unwrap();
        let dir = gallery(&tmp);
        fs::write(dir.join("one.jsx"), "").unwrap();

        let mut config = Config::new(tmp.path());
        config.output_path = tmp.path().join("generated/deep/index.json");
        run_index(&config).unwrap();
        assert!(config.output_path.exists());
    }

    #[test]
    fn unwritable_output_path_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let dir = gallery(&tmp);
        fs::write(dir.join("one.jsx"), "").unwrap();

        // A directory occupying the output path makes the write fail.
        let config = Config::new(tmp.path());
        fs::create_dir_all(&config.output_path).unwrap();
        assert!(run_index(&config).is_err());
    }

    #[test]
    fn index_result_serialization_skips_zero_diagnostics() {
        let result = IndexResult {
            files_scanned: 3,
            files_indexed: 3,
            output_path: "x.json".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("skipped_io_error"));
        assert!(!json.contains("duplicate_ids"));
        assert!(json.contains("\"files_indexed\":3"));
    }
}

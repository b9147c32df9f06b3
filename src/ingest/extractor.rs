//! Metadata extraction heuristics.
//!
//! Pure, single-pass transformation from one file's text content to an
//! `ArtifactRecord`. Extraction never fails: malformed comments, missing
//! annotations and empty content all degrade to filename-derived defaults.
//!
//! Field priority: explicit annotation > directory-derived > content
//! inference > configured default.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::artifact::ArtifactRecord;

/// First `/** ... */` documentation block in a file.
fn doc_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*\*(.*?)\*/").expect("static pattern"))
}

/// `@key value` annotation lines inside a documentation block.
fn annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@(\w+)[ \t]+([^\r\n]+)").expect("static pattern"))
}

/// Extract an `ArtifactRecord` from one component file.
///
/// `relative_path` is the file's location relative to the scan root with
/// forward slashes; timestamps come from fs metadata at indexing time.
#[must_use]
pub fn extract(
    relative_path: &str,
    content: &str,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    default_type: &str,
) -> ArtifactRecord {
    let stem = file_stem(relative_path);
    let name = derive_name(stem);
    let subdir = parent_dir(relative_path);

    let mut record = ArtifactRecord {
        id: derive_id(stem),
        description: format!("{name} component"),
        name,
        artifact_type: infer_type(subdir, content, default_type),
        tags: Vec::new(),
        path: relative_path.to_string(),
        created_at: created,
        updated_at: modified,
    };

    if let Some(block) = doc_block_re()
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    {
        apply_doc_block(&mut record, block);
    }

    // Annotations take priority; inference only fills an empty tag set.
    if record.tags.is_empty() {
        record.tags = infer_tags(subdir, content);
    }

    record
}

/// Apply overrides from a documentation block to the default record.
fn apply_doc_block(record: &mut ArtifactRecord, block: &str) {
    // The first non-annotation line becomes the description override.
    if let Some(line) = leading_text(block) {
        record.description = line;
    }

    for caps in annotation_re().captures_iter(block) {
        let key = caps[1].to_lowercase();
        let value = caps[2].trim();
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "title" | "name" => record.name = value.to_string(),
            "description" => record.description = value.to_string(),
            "type" => record.artifact_type = value.to_string(),
            "tags" => {
                record.tags = dedup(value.split(',').map(str::trim).filter(|t| !t.is_empty()));
            }
            _ => {}
        }
    }
}

/// First non-empty, non-annotation line of a documentation block, with
/// comment decoration stripped.
fn leading_text(block: &str) -> Option<String> {
    for line in block.lines() {
        let text = line.trim().trim_start_matches('*').trim();
        if text.is_empty() {
            continue;
        }
        if text.starts_with('@') {
            continue;
        }
        return Some(text.to_string());
    }
    None
}

/// Filename without directories or extension.
fn file_stem(relative_path: &str) -> &str {
    let file_name = relative_path
        .rsplit('/')
        .next()
        .unwrap_or(relative_path);
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

/// Directory portion of the relative path, if the file is nested.
fn parent_dir(relative_path: &str) -> Option<&str> {
    relative_path
        .rsplit_once('/')
        .map(|(dir, _)| dir)
        .filter(|d| !d.is_empty())
}

/// Identifier: lowercased stem with internal whitespace collapsed to hyphens.
fn derive_id(stem: &str) -> String {
    stem.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Display title: camel-case split, separators to spaces, words capitalized.
fn derive_name(stem: &str) -> String {
    let mut spaced = String::with_capacity(stem.len() + 8);
    for c in stem.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        match c {
            '-' | '_' => spaced.push(' '),
            other => spaced.push(other),
        }
    }
    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Classification: containing directory path wins, then content keywords,
/// then the configured default.
fn infer_type(subdir: Option<&str>, content: &str, default_type: &str) -> String {
    if let Some(dir) = subdir {
        return dir.to_string();
    }
    let lower = content.to_lowercase();
    if lower.contains("chart") {
        "visualization".into()
    } else if lower.contains("table") {
        "data-display".into()
    } else if lower.contains("form") {
        "input".into()
    } else {
        default_type.to_string()
    }
}

/// Tag inference from location and content keywords.
fn infer_tags(subdir: Option<&str>, content: &str) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(dir) = subdir {
        tags.push(dir.to_string());
    }
    let lower = content.to_lowercase();
    if lower.contains("chart") {
        tags.push("chart".into());
        tags.push("visualization".into());
    }
    if lower.contains("table") {
        tags.push("table".into());
        tags.push("data".into());
    }
    if lower.contains("form") {
        tags.push("form".into());
        tags.push("input".into());
    }
    dedup(tags.iter().map(String::as_str))
}

/// Collapse duplicates while keeping first-appearance order.
fn dedup<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.iter().any(|s: &String| s == item) {
            seen.push(item.to_string());
        }
    }
    seen
}

use chrono::Utc;
use tracing::info;

use crate::models::artifact::{ArtifactDraft, ArtifactRecord};

/// Creation stub: complete a draft into a full record.
///
/// Synthesizes an id from the current time and stamps both timestamps to
/// now. No file is written; persistence belongs to an external collaborator.
#[must_use]
pub fn create(draft: ArtifactDraft) -> ArtifactRecord {
    let now = Utc::now();
    let id = format!("artifact-{}", now.timestamp_millis());
    info!(id, name = %draft.name, "creating artifact stub");

    let name = draft.name;
    ArtifactRecord {
        id,
        description: draft
            .description
            .unwrap_or_else(|| format!("{name} component")),
        artifact_type: draft.artifact_type.unwrap_or_else(|| "component".into()),
        tags: draft.tags,
        path: String::new(),
        name,
        created_at: now,
        updated_at: now,
    }
}

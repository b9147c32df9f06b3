pub mod artifact;
pub mod index;

pub use artifact::{ArtifactDraft, ArtifactRecord};
pub use index::ArtifactIndex;

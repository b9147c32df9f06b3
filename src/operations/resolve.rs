use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::store::registry::ComponentRegistry;
use crate::store::Store;

/// Outcome of resolving and materializing a loadable handle.
///
/// An unknown id yields a null handle (`found: false`), never an error;
/// a materialization failure is reported in `error` with `found: true`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOutput {
    pub id: String,
    pub found: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde's skip_serializing_if
fn is_false(v: &bool) -> bool {
    !*v
}

/// Resolve an artifact id to its component implementation.
#[must_use]
pub fn resolve_loadable(
    store: &Store,
    registry: &ComponentRegistry,
    scan_root: &Path,
    id: &str,
) -> ResolveOutput {
    let Some(record) = store.get(id) else {
        warn!(id, "cannot resolve unknown artifact id");
        return ResolveOutput {
            id: id.to_string(),
            found: false,
            registered: false,
            specifier: None,
            source: None,
            error: None,
        };
    };

    let loadable = registry.resolve(record);
    let registered = loadable.is_registered();
    match loadable.materialize(scan_root) {
        Ok(component) => ResolveOutput {
            id: id.to_string(),
            found: true,
            registered,
            specifier: Some(component.specifier),
            source: Some(component.source),
            error: None,
        },
        Err(e) => {
            warn!(id, error = %e, "component resolution failed");
            ResolveOutput {
                id: id.to_string(),
                found: true,
                registered,
                specifier: None,
                source: None,
                error: Some(e.to_string()),
            }
        }
    }
}

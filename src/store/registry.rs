//! Component resolution.
//!
//! Resolution maps an artifact id to a loadable handle. A small fixed set of
//! well-known components is registered statically (their source ships with
//! the registry); everything else falls back to reading the record's source
//! file under the scan root. There is no runtime string-to-module loading.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::error::{GalleryError, Result};
use crate::models::artifact::ArtifactRecord;

/// Factory producing a statically registered component.
pub type ComponentFactory = Box<dyn Fn() -> LoadedComponent + Send + Sync>;

/// A materialized component implementation.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedComponent {
    pub id: String,
    /// Module specifier: the record path with its extension stripped, or a
    /// `builtin:` marker for registered components.
    pub specifier: String,
    /// Component source text.
    pub source: String,
}

const BAR_CHART_SOURCE: &str = include_str!("builtin/bar-chart.jsx");
const DATA_TABLE_SOURCE: &str = include_str!("builtin/data-table.jsx");

/// Registry of statically known components, keyed by artifact id.
pub struct ComponentRegistry {
    factories: HashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry pre-populated with the bundled gallery components.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("bar-chart", || builtin("bar-chart", BAR_CHART_SOURCE));
        registry.register("data-table", || builtin("data-table", DATA_TABLE_SOURCE));
        registry
    }

    /// Register a factory for an id, replacing any previous registration.
    pub fn register<F>(&mut self, id: &str, factory: F)
    where
        F: Fn() -> LoadedComponent + Send + Sync + 'static,
    {
        self.factories.insert(id.to_string(), Box::new(factory));
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Resolve a record to a loadable handle.
    ///
    /// Registered ids get the static factory; everything else gets a lazy
    /// source-file handle. Nothing is read or run until `materialize`.
    #[must_use]
    pub fn resolve<'a>(&'a self, record: &ArtifactRecord) -> Loadable<'a> {
        match self.factories.get(&record.id) {
            Some(factory) => Loadable::Registered {
                id: record.id.clone(),
                factory,
            },
            None => Loadable::Source {
                id: record.id.clone(),
                path: record.path.clone(),
                specifier: strip_extension(&record.path),
            },
        }
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn builtin(id: &str, source: &str) -> LoadedComponent {
    LoadedComponent {
        id: id.to_string(),
        specifier: format!("builtin:{id}"),
        source: source.to_string(),
    }
}

/// Record path with its file extension stripped.
fn strip_extension(path: &str) -> String {
    Path::new(path)
        .with_extension("")
        .to_string_lossy()
        .replace('\\', "/")
}

/// Deferred, one-shot component handle.
///
/// Materialization either runs the registered factory or reads the source
/// file; no retry, no timeout. Callers observe success or failure once.
pub enum Loadable<'a> {
    /// Statically registered component.
    Registered {
        id: String,
        factory: &'a ComponentFactory,
    },
    /// Generic resolution via the record's source file.
    Source {
        id: String,
        path: String,
        specifier: String,
    },
}

impl Loadable<'_> {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Loadable::Registered { id, .. } | Loadable::Source { id, .. } => id,
        }
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        matches!(self, Loadable::Registered { .. })
    }

    /// Materialize the component, consuming the handle.
    pub fn materialize(self, scan_root: &Path) -> Result<LoadedComponent> {
        match self {
            Loadable::Registered { factory, .. } => Ok(factory()),
            Loadable::Source {
                id,
                path,
                specifier,
            } => {
                let full = scan_root.join(&path);
                let source = std::fs::read_to_string(&full)
                    .map_err(|_| GalleryError::SourceMissing { path })?;
                Ok(LoadedComponent {
                    id,
                    specifier,
                    source,
                })
            }
        }
    }
}

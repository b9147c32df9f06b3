use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, Result};

/// Config filename, looked up at the project root.
const CONFIG_FILE: &str = "gallery.toml";
/// Default directory (relative to the project root) holding artifact sources.
const DEFAULT_SCAN_DIR: &str = "artifacts";
/// Default index output file (relative to the project root).
const DEFAULT_INDEX_FILE: &str = "artifacts-index.json";
/// Fallback classification when nothing better can be inferred.
const DEFAULT_TYPE: &str = "component";

/// Project-level configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the gallery project.
    pub project_root: PathBuf,
    /// Directory scanned for artifact source files.
    pub scan_root: PathBuf,
    /// Where the generated index document is written.
    pub output_path: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from gallery.toml.
    pub settings: GallerySettings,
}

/// User-configurable settings from gallery.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Directory to scan, relative to the project root.
    pub scan_dir: String,
    /// Index output file, relative to the project root.
    pub output_file: String,
    /// Exact filenames to skip during scanning.
    pub ignored_files: HashSet<String>,
    /// Directory names never descended into.
    pub ignored_dirs: HashSet<String>,
    /// Classification used when nothing can be inferred.
    pub default_type: String,
    /// Extensions (lowercase, without dot) treated as component sources.
    pub component_extensions: Vec<String>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            scan_dir: DEFAULT_SCAN_DIR.into(),
            output_file: DEFAULT_INDEX_FILE.into(),
            ignored_files: [".gitkeep", ".DS_Store", "README.md"]
                .into_iter()
                .map(String::from)
                .collect(),
            ignored_dirs: ["utils", "helpers", "node_modules"]
                .into_iter()
                .map(String::from)
                .collect(),
            default_type: DEFAULT_TYPE.into(),
            component_extensions: vec!["jsx".into(), "tsx".into()],
        }
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let config_path = project_root.join(CONFIG_FILE);

        // Try to load settings from gallery.toml
        let settings = Self::load_settings(&config_path).unwrap_or_default();

        let scan_root = project_root.join(&settings.scan_dir);
        let output_path = project_root.join(&settings.output_file);

        Self {
            project_root,
            scan_root,
            output_path,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| GalleryError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from gallery.toml if it exists.
    fn load_settings(config_path: &Path) -> Option<GallerySettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    }

    /// Save current settings to gallery.toml.
    pub fn save_settings(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| GalleryError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Check whether a generated index exists.
    #[must_use]
    pub fn index_exists(&self) -> bool {
        self.output_path.exists()
    }

    /// Convert an absolute path to a scan-root-relative path string.
    #[must_use]
    pub fn relative_path(&self, abs: &Path) -> String {
        abs.strip_prefix(&self.scan_root)
            .unwrap_or(abs)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Check if an extension marks a component source file.
    #[must_use]
    pub fn is_component_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.settings
            .component_extensions
            .iter()
            .any(|e| e == &ext)
    }
}

use std::collections::HashSet;
use std::path::PathBuf;

use ignore::WalkBuilder;
use tracing::error;

use crate::config::Config;
use crate::error::Result;

/// A candidate component file discovered under the scan root.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the scan root (forward slashes).
    pub relative_path: String,
}

/// Sequential, gitignore-aware directory walker for component sources.
pub struct Scanner {
    root: PathBuf,
    ignored_files: HashSet<String>,
    ignored_dirs: HashSet<String>,
    extensions: Vec<String>,
}

impl Scanner {
    /// Build a scanner from project configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.scan_root.clone(),
            ignored_files: config.settings.ignored_files.clone(),
            ignored_dirs: config.settings.ignored_dirs.clone(),
            extensions: config.settings.component_extensions.clone(),
        }
    }

    /// Enumerate component files under the scan root.
    ///
    /// A missing root is reported and yields an empty result rather than an
    /// error. Results are sorted by relative path so traversal order is
    /// deterministic across runs.
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        if !self.root.exists() {
            error!(root = %self.root.display(), "scan root not found");
            return Ok(Vec::new());
        }

        let ignored_dirs = self.ignored_dirs.clone();
        let entries: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .hidden(true) // skip hidden files and dirs like .git
            .git_ignore(true)
            .git_global(false)
            .follow_links(false) // Prevent symlink loops
            .filter_entry(move |e| {
                if e.file_type().is_some_and(|ft| ft.is_dir()) {
                    let name = e.file_name().to_string_lossy();
                    !ignored_dirs.contains(name.as_ref())
                } else {
                    true
                }
            })
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| {
                let name = e.file_name().to_string_lossy();
                !self.ignored_files.contains(name.as_ref())
            })
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| self.is_component_extension(ext))
            })
            .map(ignore::DirEntry::into_path)
            .collect();

        let mut files: Vec<ScannedFile> = entries
            .into_iter()
            .map(|path| {
                let relative = path
                    .strip_prefix(&self.root)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .replace('\\', "/");
                ScannedFile {
                    path,
                    relative_path: relative,
                }
            })
            .collect();

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn is_component_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|e| e == &ext)
    }
}

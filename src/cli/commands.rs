use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "artidex",
    version,
    about = "Artifact gallery indexer - scan, index and query AI-generated UI components",
    after_help = "All results are printed as minified JSON on stdout; diagnostics go to \
                  stderr. Run `artidex index` after adding or changing component files, \
                  then query the generated index with list/get/search/resolve."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan the gallery directory and write artifacts-index.json.
    ///
    /// Skips hidden entries, configured noise files (.gitkeep, .DS_Store,
    /// README.md) and helper directories (utils, helpers, node_modules).
    /// Unreadable files are logged and skipped; the run only fails if the
    /// index document cannot be written.
    Index {
        /// Project root directory (default: current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// List every indexed artifact, ordered by display name
    List,

    /// Fetch a single artifact by exact id
    Get {
        /// Artifact id (e.g. "bar-chart")
        id: String,
    },

    /// Resolve an artifact id to its component implementation.
    ///
    /// Well-known bundled components resolve statically; everything else is
    /// read from the record's source file under the scan root. An unknown id
    /// prints a null handle rather than failing.
    Resolve {
        /// Artifact id
        id: String,
    },

    /// Filter artifacts by free-text query, tags and type
    Search {
        /// Case-insensitive substring matched against name, description, tags
        #[arg(short, long)]
        query: Option<String>,
        /// Required tag (repeatable; all given tags must be present)
        #[arg(short, long)]
        tag: Vec<String>,
        /// Exact type match (e.g. "visualization")
        #[arg(long = "type")]
        artifact_type: Option<String>,
    },

    /// Describe a new artifact's intended metadata (writes no file)
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
        /// Classification string
        #[arg(long = "type")]
        artifact_type: Option<String>,
        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Gallery summary: artifact count and type/tag distributions
    Stats,
}

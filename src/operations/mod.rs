//! Query and resolution operations served against a loaded store snapshot.

pub mod create;
pub mod get;
pub mod list;
pub mod resolve;
pub mod search;
pub mod stats;

pub use create::create;
pub use get::{get_by_id, GetResult};
pub use list::{list_all, ListResult};
pub use resolve::{resolve_loadable, ResolveOutput};
pub use search::{search, SearchFilter, SearchResult};
pub use stats::{gallery_stats, LabelCount, StatsResult};

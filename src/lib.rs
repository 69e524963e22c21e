//! routemap — an in-memory undirected graph of cities and routes.
//!
//! Cities are uniquely named nodes; links are symmetric unweighted
//! routes between two distinct cities. Path search is an iterative
//! depth-first traversal returning discovery order, not shortest
//! paths. Maps round-trip through the binary .rmap file format.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{MmapReader, RmapReader, RmapWriter};
pub use graph::{dfs_path, RouteMap, RouteMapBuilder};
pub use types::{
    now_micros, City, FileHeader, MapError, MapResult, FORMAT_VERSION, MAX_LINKS_PER_CITY,
    MAX_NAME_LEN, RMAP_MAGIC,
};

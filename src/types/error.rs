//! Error types for the routemap library.

use thiserror::Error;

/// All errors that can occur in the routemap library.
#[derive(Error, Debug)]
pub enum MapError {
    /// Invalid magic bytes in file header.
    #[error("Invalid magic bytes in file header")]
    InvalidMagic,

    /// Unsupported format version.
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// City not found by name.
    #[error("City {0:?} not found")]
    CityNotFound(String),

    /// City name already present in the map.
    #[error("City {0:?} already exists")]
    DuplicateCity(String),

    /// Self-link not allowed.
    #[error("City {0:?} cannot be linked to itself")]
    SelfLink(String),

    /// The pair is already linked.
    #[error("Cities {0:?} and {1:?} are already linked")]
    DuplicateLink(String, String),

    /// The pair is not linked.
    #[error("Cities {0:?} and {1:?} are not linked")]
    LinkNotFound(String, String),

    /// City name exceeds maximum length.
    #[error("City name exceeds maximum length: {len} > {max}")]
    NameTooLong { len: usize, max: usize },

    /// Too many links on a single city.
    #[error("Maximum links per city exceeded: {0}")]
    TooManyLinks(u16),

    /// A neighbor entry references a city that does not exist.
    #[error("Neighbor entry references unknown city {0:?}")]
    InvalidNeighbor(String),

    /// One side of a link is present without its reciprocal.
    #[error("Asymmetric link: {0:?} lists {1:?} but not the reverse")]
    AsymmetricLink(String, String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Compression error.
    #[error("Compression error: {0}")]
    Compression(String),

    /// JSON error on the import surface.
    #[error("JSON error: {0}")]
    Json(String),

    /// File is empty or truncated.
    #[error("File is empty or truncated")]
    Truncated,

    /// Corrupt data at a given offset.
    #[error("Corrupt data at offset {0}")]
    Corrupt(u64),
}

/// Convenience result type for routemap operations.
pub type MapResult<T> = Result<T, MapError>;

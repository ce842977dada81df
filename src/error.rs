//! Error taxonomy shared across the crate.
//!
//! Library modules return specific error kinds via `thiserror`; the CLI
//! layer decides whether a failure aborts the process or only the current
//! item. Batch operations (download-all, distribute, purge) log per-item
//! failures and continue; single-item operations propagate the first
//! failure to their caller. Nothing in this module is fatal by itself.

use reqwest::StatusCode;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure kinds produced by the API client and the sync layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure from the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status whose body carried no decodable API envelope.
    #[error("http status {0}")]
    Http(StatusCode),

    /// Response body matched neither JSON nor XML. Carries the raw payload
    /// for diagnostics.
    #[error("response matched neither JSON nor XML: {payload}")]
    Decode { payload: String },

    /// Error reported inside a decoded API envelope, surfaced verbatim.
    #[error("api error {name}: {message}")]
    Api { name: String, message: String },

    /// The server rejected a playlist mutation submitted against a stale
    /// revision. No client-side merge or retry is attempted.
    #[error("playlist revision conflict: {0}")]
    RevisionConflict(String),

    /// The download-info response listed no codec options for the track.
    #[error("no codec available for track")]
    NoCodecAvailable,

    /// The download descriptor carried an empty `path` field.
    #[error("download descriptor has empty path")]
    EmptyPath,

    /// The descriptor fetch produced no usable descriptor at all.
    #[error("download descriptor missing or unusable")]
    MissingDescriptor,

    /// Track id could not be converted to the numeric form mutation
    /// operations require.
    #[error("track id {0} is not numeric")]
    InvalidTrackId(String),

    /// Track carries no album, so no (track, album) playlist reference can
    /// be built for it.
    #[error("track {0} has no album reference")]
    MissingAlbum(String),

    /// Single-track lookup returned an empty result list.
    #[error("track {0} not found")]
    TrackNotFound(u64),

    /// No user id was configured and none could be resolved.
    #[error("no user id configured or resolvable")]
    NoUser,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::Decode`] from the raw response bytes.
    pub fn decode(payload: &[u8]) -> Self {
        Error::Decode {
            payload: String::from_utf8_lossy(payload).into_owned(),
        }
    }

    /// True when the error is a server-reported revision conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::RevisionConflict(_))
    }
}

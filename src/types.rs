use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::{Error, Result};

/// Value that the API serializes sometimes as a number and sometimes as a
/// string (seen in `exec-duration-millis`). Decoded through an untagged
/// union so both wire shapes normalize into one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Str(String),
}

impl Default for IntOrString {
    fn default() -> Self {
        IntOrString::Int(0)
    }
}

/// Request bookkeeping the API attaches to every JSON response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InvocationInfo {
    pub hostname: String,
    pub req_id: String,
    pub exec_duration_millis: Option<IntOrString>,
}

/// Server-side error body: a machine name plus a human message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub name: String,
    pub message: String,
}

/// Generic envelope every JSON endpoint responds with.
///
/// `result` is the endpoint-specific payload; an empty response body decodes
/// to the payload's `Default`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Default> {
    #[serde(default)]
    pub invocation_info: InvocationInfo,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub result: T,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub various: bool,
    pub composer: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub track_count: u32,
    pub available: bool,
    pub artists: Vec<Artist>,
}

/// A track as returned by the API. Immutable once fetched; re-fetched on
/// demand rather than cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Track {
    /// String on the wire, but convertible to an integer for mutation calls.
    pub id: String,
    pub real_id: String,
    pub title: String,
    pub available: bool,
    pub available_for_premium_users: bool,
    pub duration_ms: u64,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub lyrics_available: bool,
}

impl Track {
    /// First artist in the list; the API orders them primary-first.
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }

    /// Builds the (trackId, albumId) pair mutation operations address the
    /// track by. The first album's id is the canonical album reference.
    pub fn mutation_ref(&self) -> Result<PlaylistTrackRef> {
        let id = self
            .id
            .parse()
            .map_err(|_| Error::InvalidTrackId(self.id.clone()))?;
        let album = self
            .albums
            .first()
            .ok_or_else(|| Error::MissingAlbum(self.id.clone()))?;
        Ok(PlaylistTrackRef {
            id,
            album_id: album.id,
        })
    }
}

/// Minimal addressable unit inside a playlist. The server indexes playlist
/// membership by (track, album), so the album id is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistTrackRef {
    pub id: u64,
    pub album_id: u64,
}

/// Playlist summary, as returned by list calls and by every accepted
/// mutation. `revision` increments by exactly one per accepted mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Playlist {
    pub uid: u64,
    pub kind: u32,
    pub revision: u32,
    pub track_count: u32,
    pub duration_ms: u64,
    pub collective: bool,
    pub available: bool,
    pub title: String,
    pub description: String,
    pub visibility: String,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// Playlist entry with the full track hydrated (`users/{uid}/playlists/{kind}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaylistItem {
    pub id: u64,
    pub timestamp: Option<DateTime<Utc>>,
    pub recent: bool,
    pub track: Track,
}

/// Playlist fetched with its contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistWithTracks {
    #[serde(flatten)]
    pub playlist: Playlist,
    #[serde(default)]
    pub tracks: Vec<PlaylistItem>,
}

/// Playlist entry when only track references are requested
/// (`users/{uid}/playlists?kinds=...`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaylistRefItem {
    pub id: u64,
    pub album_id: u64,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Playlist fetched by kinds, with track references only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistWithRefs {
    #[serde(flatten)]
    pub playlist: Playlist,
    #[serde(default)]
    pub tracks: Vec<PlaylistRefItem>,
}

/// Entry of the liked-tracks library (ids only; hydrate via the batched
/// tracks call).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LikedTrack {
    pub id: String,
    pub album_id: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LikedLibrary {
    pub uid: u64,
    pub revision: u32,
    pub playlist_uuid: String,
    pub tracks: Vec<LikedTrack>,
}

/// `users/{uid}/likes/tracks` wraps the library one level deeper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LikedLibraryResult {
    pub library: LikedLibrary,
}

/// Lyrics block of the track supplement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lyrics {
    pub id: u64,
    pub full_lyrics: String,
    pub has_rights: bool,
    pub show_translation: bool,
}

/// `tracks/{id}/supplement` payload; only the lyrics block is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSupplement {
    pub id: String,
    pub lyrics: Lyrics,
}

/// One codec/bitrate option from `tracks/{id}/download-info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadOption {
    pub codec: String,
    pub gain: bool,
    pub preview: bool,
    pub download_info_url: String,
    pub direct: bool,
    pub bitrate_in_kbps: u32,
}

/// Ephemeral descriptor fetched from a download option's info URL.
///
/// The endpoint responds with XML (`host`, `path`, `ts`, `s`); field names
/// must be preserved for interoperability. Valid for about a minute after
/// the download-info call and used exactly once — never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadDescriptor {
    pub host: String,
    pub path: String,
    pub ts: String,
    pub region: Option<String>,
    pub s: String,
}

/// `account/settings` payload; only the uid is consumed, to resolve the
/// default user when none is configured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountSettings {
    pub uid: u64,
}

/// One locally-declared routing rule: orphaned liked tracks whose primary
/// artist matches one of `artists` go to the playlist `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorshipRule {
    pub title: String,
    pub kind: u32,
    pub artists: Vec<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub kind: u32,
    pub title: String,
    pub tracks: u32,
    pub revision: u32,
}

#[derive(Tabled)]
pub struct OrphanTableRow {
    pub id: String,
    pub artist: String,
    pub title: String,
}

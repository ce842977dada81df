use reqwest::Method;
use serde::Serialize;

use crate::{
    error::Result,
    types::{Playlist, PlaylistTrackRef, PlaylistWithRefs, PlaylistWithTracks},
    yandex::{ApiClient, Body},
};

/// Positional diff operation of the playlist mutation protocol.
///
/// Serialized into the `diff` form field of a `change-relative` call as a
/// one-element JSON array. `Insert` places `tracks` at index `at`;
/// `Delete` removes the `[from, to)` slice described by `tracks`.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PlaylistDiff<'a> {
    Insert {
        at: usize,
        tracks: &'a [PlaylistTrackRef],
    },
    Delete {
        from: usize,
        to: usize,
        tracks: &'a [PlaylistTrackRef],
    },
}

/// Options for [`ApiClient::playlists_by_kinds`].
#[derive(Debug, Clone, Default)]
pub struct ByKindsOptions {
    pub kinds: Vec<u32>,
    pub mixed: bool,
    pub rich_tracks: bool,
}

impl ApiClient {
    /// Returns the playlists of the given user (the client's default user
    /// when `user` is `None`).
    pub async fn playlists(&self, user: Option<u64>) -> Result<Vec<Playlist>> {
        let uid = self.effective_user(user)?;
        self.get(&format!("users/{uid}/playlists/list")).await
    }

    /// Returns one playlist with its full track contents.
    ///
    /// This is also the call mutation users make immediately before a
    /// mutation to observe the current revision.
    pub async fn playlist(&self, user: Option<u64>, kind: u32) -> Result<PlaylistWithTracks> {
        let uid = self.effective_user(user)?;
        self.get(&format!("users/{uid}/playlists/{kind}")).await
    }

    /// Returns several playlists by kind, with track references only.
    ///
    /// Kinds are comma-joined in the `kinds` query parameter; the boolean
    /// filters go over the wire as lowercase `"true"`/`"false"`.
    pub async fn playlists_by_kinds(
        &self,
        user: Option<u64>,
        opts: &ByKindsOptions,
    ) -> Result<Vec<PlaylistWithRefs>> {
        let uid = self.effective_user(user)?;
        let kinds = opts
            .kinds
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.get(&format!(
            "users/{uid}/playlists?kinds={kinds}&mixed={}&rich-tracks={}",
            opts.mixed, opts.rich_tracks
        ))
        .await
    }

    /// Creates a playlist for the client's user.
    pub async fn create_playlist(&self, title: &str, public: bool) -> Result<Playlist> {
        let uid = self.effective_user(None)?;
        let visibility = if public { "public" } else { "private" };
        let form = vec![
            ("title".to_string(), title.to_string()),
            ("visibility".to_string(), visibility.to_string()),
        ];
        self.post_form(&format!("users/{uid}/playlists/create"), form)
            .await
    }

    /// Renames a playlist of the client's user.
    pub async fn rename_playlist(&self, kind: u32, title: &str) -> Result<Playlist> {
        let uid = self.effective_user(None)?;
        let form = vec![("value".to_string(), title.to_string())];
        self.post_form(&format!("users/{uid}/playlists/{kind}/name"), form)
            .await
    }

    /// Deletes a playlist of the client's user. The API answers with a bare
    /// `"ok"` result string.
    pub async fn delete_playlist(&self, kind: u32) -> Result<String> {
        let uid = self.effective_user(None)?;
        let req = self.request(
            Method::POST,
            &format!("users/{uid}/playlists/{kind}/delete"),
            None,
        )?;
        self.fetch(req).await
    }

    /// Inserts tracks into a playlist at position `at` (default 0).
    ///
    /// `revision` must be the revision the caller last observed; the server
    /// rejects the diff when it is stale ([`crate::Error::RevisionConflict`],
    /// surfaced verbatim, no retry). On success the returned summary
    /// carries the incremented revision. Callers that need at-most-one-
    /// writer semantics must re-fetch the playlist immediately before each
    /// mutation; the read-then-write pair is not atomic against concurrent
    /// external writers. Bulk callers issue one call per playlist per
    /// batch, not one per track.
    pub async fn add_tracks(
        &self,
        kind: u32,
        revision: u32,
        tracks: &[PlaylistTrackRef],
        at: Option<usize>,
    ) -> Result<Playlist> {
        let diff = PlaylistDiff::Insert {
            at: at.unwrap_or(0),
            tracks,
        };
        self.change_relative(kind, revision, &diff).await
    }

    /// Removes tracks from a playlist.
    ///
    /// `bounds` is the `(from, to)` positional range of the removal,
    /// defaulting to `(0, tracks.len())`. Revision semantics are the same
    /// as for [`ApiClient::add_tracks`].
    pub async fn remove_tracks(
        &self,
        kind: u32,
        revision: u32,
        tracks: &[PlaylistTrackRef],
        bounds: Option<(usize, usize)>,
    ) -> Result<Playlist> {
        let (from, to) = bounds.unwrap_or((0, tracks.len()));
        let diff = PlaylistDiff::Delete { from, to, tracks };
        self.change_relative(kind, revision, &diff).await
    }

    async fn change_relative(
        &self,
        kind: u32,
        revision: u32,
        diff: &PlaylistDiff<'_>,
    ) -> Result<Playlist> {
        let uid = self.effective_user(None)?;
        let form = vec![
            ("diff".to_string(), serde_json::to_string(&[diff])?),
            ("revision".to_string(), revision.to_string()),
        ];
        let req = self.request(
            Method::POST,
            &format!("users/{uid}/playlists/{kind}/change-relative"),
            Some(Body::Form(form)),
        )?;
        self.fetch(req).await
    }
}

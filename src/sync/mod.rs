//! # Sync Module
//!
//! High-level synchronization on top of the API client: the library
//! reconciler and the download pipeline.
//!
//! - [`reconcile`] - computes the set of liked tracks present in no
//!   playlist ("orphans") and routes them into playlists according to the
//!   user's authorship rules; also empties rule-target playlists in bulk.
//! - [`download`] - mirrors playlists to the local filesystem, skipping
//!   tracks already present and fetching lyrics alongside the audio.
//!
//! Both are batch layers: per-item failures are logged and the batch
//! continues; see the error-propagation notes in [`crate::error`]. All
//! processing is sequential per playlist and per track — the mutation
//! protocol is not safe for concurrent writers on one playlist, and the
//! dedup snapshot is taken once per batch.

pub mod download;
pub mod reconcile;

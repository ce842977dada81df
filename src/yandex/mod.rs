//! # Yandex Music Integration Module
//!
//! This module provides the interface to the Yandex Music API, implementing
//! the transport layer, playlist management, track retrieval, and the
//! signed-URL exchange for media downloads. It serves as the integration
//! layer between the sync machinery and the remote service, handling HTTP
//! communication, body encoding, response decoding, and error mapping.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of API functionality:
//!
//! ```text
//! Application Layer (CLI, Sync)
//!          ↓
//! Yandex Integration Layer
//!     ├── Transport (requests, JSON/form bodies, JSON→XML decoding)
//!     ├── Account (user id resolution)
//!     ├── Playlist Operations (list, fetch, diff-based mutation)
//!     └── Track Operations (lookup, liked library, signed downloads)
//!          ↓
//! HTTP Layer (reqwest)
//!          ↓
//! Yandex Music API
//! ```
//!
//! ## Core Modules
//!
//! ### Transport
//!
//! [`client`] - The [`ApiClient`] builds authenticated requests and decodes
//! responses:
//! - **Body Encoding**: key/value collections go out URL-encoded (with the
//!   form content type set only on POST); anything else is JSON with no
//!   content-type override, matching the API's default expectation.
//! - **Response Decoding**: JSON first, XML fallback (the descriptor
//!   endpoint is the one XML producer), empty bodies are not errors, and
//!   anything else fails with the raw payload attached for diagnostics.
//! - **Envelope Handling**: server-reported errors inside a decoded
//!   envelope surface as typed errors; the stale-revision error gets its
//!   own kind so mutation callers can recognize conflicts.
//!
//! ### Playlist Operations
//!
//! [`playlists`] - List/fetch plus the revision-guarded mutation protocol.
//! Track insertion and removal are expressed as positional diff operations
//! submitted together with the last observed revision; every accepted
//! mutation increments the revision by exactly one, and a stale revision is
//! rejected by the server. The protocol performs no automatic retry and no
//! merge: callers that need at-most-one-writer semantics re-fetch the
//! playlist immediately before each mutation. The read-then-write pair is
//! not atomic; concurrent external writers can still race it, which is a
//! documented limitation of the wire protocol rather than something this
//! module papers over.
//!
//! ### Track Operations
//!
//! [`tracks`] - Track lookup (single and batched), the liked-tracks
//! library, the lyrics supplement, and the three-step signed-URL exchange:
//! download-info → time-boxed descriptor fetch → keyed digest over the
//! descriptor. Each step has a distinct failure kind so batch callers can
//! skip a single track and continue.
//!
//! ## Error Handling
//!
//! All functions return [`crate::Result`]. Transport and HTTP failures
//! propagate without retry; per-track resolver failures are terminal for
//! that track only. See [`crate::error::Error`] for the full taxonomy.

pub mod account;
pub mod client;
pub mod playlists;
pub mod tracks;

pub use client::{ApiClient, Body};

//! # CLI Module
//!
//! This module provides the command-line interface layer for yamsync. It
//! implements all user-facing commands and coordinates between the API
//! client, the sync machinery, and user interaction.
//!
//! ## Command Categories
//!
//! ### Playlist Operations
//!
//! - [`list_playlists`] - Table of the user's playlists
//! - [`create_playlist`] / [`rename_playlist`] / [`delete_playlist`] -
//!   Playlist management on the remote library
//!
//! ### Mirror Operations
//!
//! - [`download`] - Mirror one, several or all playlists to disk
//!
//! ### Reconciliation Operations
//!
//! - [`orphans`] - Table of liked tracks present in no playlist
//! - [`distribute`] - Route orphans into playlists per authorship rules
//! - [`purge`] - Empty every rule-target playlist
//!
//! ## Error Handling Philosophy
//!
//! Commands terminate the process (via the `error!` macro) only for
//! unrecoverable setup failures — missing configuration, no resolvable
//! user. Operational failures inside batches are logged by the sync layer
//! and the batch continues; single-operation failures print a warning and
//! exit non-destructively.

mod distribute;
mod download;
mod orphans;
mod playlists;

pub use distribute::{distribute, purge};
pub use download::download;
pub use orphans::orphans;
pub use playlists::{create_playlist, delete_playlist, list_playlists, rename_playlist};

use crate::{config, error, yandex::ApiClient};

/// Builds the API client from configuration, resolving the user id via the
/// account settings when it is not configured. Exits the process when the
/// client cannot be constructed or no user can be resolved.
pub(crate) async fn build_client() -> ApiClient {
    let mut client = match ApiClient::new(config::access_token(), config::user_id()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build API client: {}", e);
        }
    };

    if client.user_id().is_none() {
        match client.account_settings().await {
            Ok(settings) => client.set_user_id(settings.uid),
            Err(e) => {
                error!(
                    "Cannot resolve user id from account settings. Set YAMUSIC_USER_ID.\n Error: {}",
                    e
                );
            }
        }
    }

    client
}

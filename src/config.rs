//! Configuration management for the Yandex Music sync client.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files: the API token, the default user
//! id, the mirror output directory, and the authorship-rules file. Rules
//! are loaded once per reconciliation run and are read-only to the core.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use dotenv;

use crate::{
    error::{Error, Result},
    types::AuthorshipRule,
};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `yamsync/.env`. This allows users to store the
/// API token securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/yamsync/.env`
/// - macOS: `~/Library/Application Support/yamsync/.env`
/// - Windows: `%LOCALAPPDATA%/yamsync/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
pub async fn load_env() -> std::result::Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("yamsync/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the OAuth access token for the Yandex Music API.
///
/// Every request to the API carries this token in an `Authorization: OAuth`
/// header.
///
/// # Panics
///
/// Panics if the `YAMUSIC_TOKEN` environment variable is not set.
pub fn access_token() -> String {
    env::var("YAMUSIC_TOKEN").expect("YAMUSIC_TOKEN must be set")
}

/// Returns the configured numeric user id, if any.
///
/// Unlike the other configuration values this one is optional: when unset
/// (or not numeric) the client resolves the user id once at startup via
/// `account/settings`.
pub fn user_id() -> Option<u64> {
    env::var("YAMUSIC_USER_ID").ok().and_then(|v| v.parse().ok())
}

/// Returns the root directory of the local library mirror.
///
/// Playlist folders (`<title>/tracks`, `<title>/lyrics`) are created below
/// this directory by the download pipeline.
///
/// # Panics
///
/// Panics if the `YAMSYNC_OUTPUT_DIR` environment variable is not set.
pub fn output_dir() -> PathBuf {
    PathBuf::from(env::var("YAMSYNC_OUTPUT_DIR").expect("YAMSYNC_OUTPUT_DIR must be set"))
}

/// Returns the path of the authorship-rules file.
///
/// # Panics
///
/// Panics if the `YAMSYNC_RULES_FILE` environment variable is not set.
pub fn rules_file() -> PathBuf {
    PathBuf::from(env::var("YAMSYNC_RULES_FILE").expect("YAMSYNC_RULES_FILE must be set"))
}

/// Loads the authorship-rule list from [`rules_file`].
///
/// The file is a JSON array of `{title, kind, artists}` objects. It is read
/// fresh on every call so a reconciliation run always sees the current
/// rules; the core never writes it back.
///
/// # Errors
///
/// Returns [`Error::Config`] when the file cannot be read or parsed.
pub async fn load_rules() -> Result<Vec<AuthorshipRule>> {
    let path = rules_file();
    let raw = async_fs::read_to_string(&path)
        .await
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::Config(format!("cannot parse {}: {}", path.display(), e)))
}

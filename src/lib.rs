//! Yandex Music Library Sync CLI Library
//!
//! This library provides functionality for mirroring a personal Yandex Music
//! library to the local filesystem and for keeping the user's playlists on
//! the server consistent with locally-declared authorship rules. It includes
//! modules for API communication, CLI operations, configuration management,
//! and the reconciliation/download machinery.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared across the crate
//! - `sync` - Library reconciliation and the download pipeline
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `yandex` - Yandex Music API client implementation
//!
//! # Example
//!
//! ```
//! use yamsync::{config, yandex::ApiClient};
//!
//! #[tokio::main]
//! async fn main() -> yamsync::Result<()> {
//!     config::load_env().await.expect("env");
//!     let client = ApiClient::new(config::access_token(), config::user_id())?;
//!     // Use the client...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod sync;
pub mod types;
pub mod utils;
pub mod yandex;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Scanning playlists...");
/// info!("Found {} orphaned tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Playlist downloaded");
/// success!("Routed {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. It should only be used in the
/// CLI layer for fatal errors where recovery is not possible; library code
/// returns [`error::Error`] instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination. Used for recoverable issues, typically per-item failures
/// inside batch operations.
///
/// # Example
///
/// ```
/// warning!("Skipping track {}: {}", id, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

//! Mood Playlist Generator Library
//!
//! This library turns a free-text mood description into a Spotify playlist. A
//! language model interprets the mood into a playlist title and a list of plain
//! search phrases, every phrase is resolved to a track through the Spotify
//! search API, and the matches are written into a new playlist on the user's
//! account.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the JSON service
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loaded from the environment and `.env` files
//! - `error` - Error taxonomy shared by every layer
//! - `llm` - Language model client and mood interpretation
//! - `management` - Playlist generation orchestration
//! - `server` - HTTP server bootstrap and routing
//! - `spotify` - Spotify Web API client (auth, search, playlists)
//! - `types` - Data structures and wire formats
//! - `utils` - Small helpers such as token normalization
//!
//! # Example
//!
//! ```
//! use moodlist::{config, management::PlaylistGenerator, types::MoodRequest};
//!
//! #[tokio::main]
//! async fn main() -> moodlist::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let generator = PlaylistGenerator::from_config(&config)?;
//!     let request = MoodRequest::new("rainy sunday coffee", 10);
//!     let result = generator.generate(&request, "BQC...").await?;
//!     println!("{}", result.playlist_name);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Res};

/// Prints an informational message with a blue bullet point.
///
/// Used for step-by-step progress of the generation flow and the server.
///
/// # Example
///
/// ```
/// info!("Processing query: {}", query);
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
/// # Example
///
/// ```
/// success!("Added song: {} by {}", song.name, song.artist);
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
/// Only meant for fatal startup failures in the binary (missing configuration,
/// unbindable address). Request handling never calls this; it returns
/// [`Error`] values instead.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Upstream failures are reported through this macro together with the
/// provider's status code and response body before the error is returned.
///
/// # Example
///
/// ```
/// warning!("Failed to search Spotify: {}", status);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

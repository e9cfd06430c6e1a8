//! # CLI Module
//!
//! Terminal front-end of the playlist generator. Each command receives the
//! configuration loaded at startup and delegates to the same clients the HTTP
//! service uses.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the JSON HTTP service
//! - [`auth_url`] - Prints (and optionally opens) the Spotify authorization URL
//! - [`token`] - Exchanges an authorization code and prints the token payload
//! - [`generate`] - Runs one mood to playlist generation from the terminal
//!
//! ## Usage Patterns
//!
//! ```bash
//! moodlist auth-url --open            # Authorize the app in the browser
//! moodlist token AQD...               # Exchange the code from the redirect
//! moodlist generate --token BQC... --songs 15 rainy sunday coffee
//! moodlist serve                      # Or expose everything over HTTP
//! ```
//!
//! Failures are printed with the `error!` macro, which exits the process.

mod auth;
mod generate;
mod serve;

pub use auth::auth_url;
pub use auth::token;
pub use generate::generate;
pub use serve::serve;

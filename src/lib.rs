//! Lyrapid — proxied lyrics lookup API
//!
//! This library implements a small HTTP service that looks up song lyrics on
//! behalf of callers arriving through the RapidAPI gateway. A request names a
//! song title (and optionally an artist) as URL path segments; the service
//! authenticates the gateway, validates the query, asks the Genius API for the
//! top-ranked match and returns the lyrics together with song metadata as JSON.
//!
//! # Modules
//!
//! - `api` - HTTP request handlers (lyrics endpoint, health endpoint)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Request error taxonomy and JSON error responses
//! - `genius` - Genius lyrics provider client
//! - `server` - HTTP server setup and routing
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use lyrapid::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> lyrapid::Res<()> {
//!     config::load_env().await?;
//!     cli::serve().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod genius;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use lyrapid::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates throughout the
/// application. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
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
/// Used to provide positive feedback when operations complete successfully.
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Found lyrics for {}", title);
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
/// Used for unrecoverable errors that require immediate program termination.
/// Accepts the same arguments as `println!`.
///
/// # Behavior
///
/// This macro will cause the program to exit with code 1 after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
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
/// Used for recoverable issues or important information that users should
/// notice. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("Retry-After of {} seconds exceeds the sane limit", retry_after);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

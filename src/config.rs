//! Configuration management for the lyrics API.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It covers the server bind address,
//! the RapidAPI proxy secret, the Genius API credentials and the source-IP
//! allowlist policy.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Source addresses the RapidAPI gateway forwards requests from.
///
/// The set is compiled into the binary and never changes at runtime; new
/// gateway addresses published by RapidAPI require a rebuild. Enforcement is
/// controlled separately by [`enforce_ip_allowlist`].
pub const RAPIDAPI_IPS: &[&str] = &[
    "52.5.229.222",
    "54.165.128.88",
    "54.221.78.73",
    "54.173.35.199",
];

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lyrapid/.env`. Variables already present in
/// the process environment keep priority; a missing file is not an error so
/// that fully env-var based deployments work without one.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lyrapid/.env`
/// - macOS: `~/Library/Application Support/lyrapid/.env`
/// - Windows: `%LOCALAPPDATA%/lyrapid/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lyrapid/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, e.g. `127.0.0.1:8080`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the shared secret expected in the `x-rapidapi-proxy-secret` header.
///
/// Retrieves the `RAPIDAPI_PROXY_SECRET` environment variable. The RapidAPI
/// gateway attaches this value to every proxied request; requests without it
/// are rejected before any other processing.
///
/// # Panics
///
/// Panics if the `RAPIDAPI_PROXY_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The secret should be kept confidential and never exposed in logs or
/// version control.
pub fn rapidapi_proxy_secret() -> String {
    env::var("RAPIDAPI_PROXY_SECRET").expect("RAPIDAPI_PROXY_SECRET must be set")
}

/// Returns the Genius Web API base URL.
///
/// Retrieves the `GENIUS_API_URL` environment variable, e.g.
/// `https://api.genius.com`. Kept configurable so tests and staging can point
/// the client at a different host.
///
/// # Panics
///
/// Panics if the `GENIUS_API_URL` environment variable is not set.
pub fn genius_api_url() -> String {
    env::var("GENIUS_API_URL").expect("GENIUS_API_URL must be set")
}

/// Returns the Genius API access token used as bearer auth on API calls.
///
/// Retrieves the `GENIUS_ACCESS_TOKEN` environment variable, obtained when
/// registering an API client at genius.com.
///
/// # Panics
///
/// Panics if the `GENIUS_ACCESS_TOKEN` environment variable is not set.
pub fn genius_access_token() -> String {
    env::var("GENIUS_ACCESS_TOKEN").expect("GENIUS_ACCESS_TOKEN must be set")
}

/// Returns whether the source-IP allowlist is enforced.
///
/// Retrieves the optional `ENFORCE_IP_ALLOWLIST` environment variable.
/// Accepts `1`, `true` or `yes` (case-insensitive) as enabled; anything else,
/// or an unset variable, disables the check. The allowlist is a
/// defense-in-depth measure on top of the proxy secret, so it defaults to
/// off.
pub fn enforce_ip_allowlist() -> bool {
    env::var("ENFORCE_IP_ALLOWLIST")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Tests whether a caller address is a known RapidAPI gateway address.
pub fn ip_allowed(ip: &str) -> bool {
    RAPIDAPI_IPS.contains(&ip)
}

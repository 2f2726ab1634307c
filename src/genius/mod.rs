//! # Genius Integration Module
//!
//! This module implements the client side of the lyrics lookup: song search
//! and song detail retrieval against the Genius Web API, and extraction of the
//! lyrics text from the public song page, which is the only place Genius
//! serves it.
//!
//! ## Overview
//!
//! A lookup is three sequential steps, each owned by a submodule:
//!
//! 1. [`search_songs`] - `GET /search?q=…` returns ranked song hits; the
//!    handler only ever consumes the top one.
//! 2. [`get_song`] - `GET /songs/{id}` supplies the album and release-date
//!    detail the search response lacks.
//! 3. [`fetch_lyrics`] - fetches the hit's public page and pulls the text out
//!    of the lyrics container elements.
//!
//! ## Error Handling
//!
//! API calls return `reqwest::Error` directly; the page scrape returns the
//! crate-wide boxed error because "the page had no lyrics" is not an HTTP
//! failure. Rate-limit responses (429) are honored via the `Retry-After`
//! header with a sanity cap, and 502 responses retry after a fixed delay,
//! matching how the rest of the service treats flaky upstreams. Callers
//! decide what a failure means; the lyrics endpoint downgrades every one of
//! them to its not-found response.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support
//! - **scraper** - CSS-selector driven extraction from the song page HTML
//! - **urlencoding** - query-string encoding of search text

mod lyrics;
mod search;
mod song;

pub use lyrics::fetch_lyrics;
pub use search::search_songs;
pub use song::get_song;

use crate::config;

/// Shared Genius client: one connection pool, one base URL, one token.
#[derive(Debug, Clone)]
pub struct GeniusClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_url: String,
    pub(crate) access_token: String,
}

impl GeniusClient {
    pub fn new(api_url: String, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            access_token,
        }
    }

    /// Builds a client from `GENIUS_API_URL` and `GENIUS_ACCESS_TOKEN`.
    ///
    /// # Panics
    ///
    /// Panics if either variable is unset; call after `config::load_env`.
    pub fn from_env() -> Self {
        Self::new(config::genius_api_url(), config::genius_access_token())
    }
}

//! # API Module
//!
//! This module provides the HTTP endpoints of the lyrics service.
//!
//! ## Endpoints
//!
//! ### Lyrics
//!
//! - [`lyrics`] - The proxied lookup endpoint. Registered for every method on
//!   `/` and `/{*query}` so that it owns the full response contract: it
//!   authenticates the RapidAPI gateway via the proxy-secret header,
//!   optionally checks the caller address against the gateway allowlist,
//!   rejects non-GET methods, validates the path query, and proxies the
//!   lookup to Genius.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning service name, status and
//!   version for monitoring systems and load balancers.
//!
//! ## Response Contract
//!
//! Success responses carry `Cache-Control: public, s-maxage=86400,
//! stale-while-revalidate=43200` and `Access-Control-Allow-Origin: *` so the
//! gateway and browsers may cache aggressively; every failure is a JSON
//! `{error}` body with the matching 4xx/5xx status (see [`crate::error`]).

mod health;
mod lyrics;

pub use health::health;
pub use lyrics::{FORWARDED_FOR_HEADER, PROXY_SECRET_HEADER, lyrics};

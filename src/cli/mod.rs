//! # CLI Module
//!
//! This module provides the command-line interface layer of the service. The
//! binary is primarily a server, so the surface is small:
//!
//! - [`serve`] - Runs the HTTP API server until terminated
//! - [`lookup`] - Performs a single lyrics lookup from the terminal, useful
//!   for checking Genius credentials and connectivity without deploying
//!
//! Both commands read their configuration the same way the server does (see
//! [`crate::config`]); `lookup` prints through the colored status macros and
//! exits non-zero on failure.

mod lookup;
mod serve;

pub use lookup::lookup;
pub use serve::serve;

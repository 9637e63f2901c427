//! Geo DNS Cache Infrastructure Layer
//!
//! SQLite-backed directory and cache, MaxMind geolocation, and the DNS
//! wire/network side of the proxy.
pub mod database;
pub mod dns;
pub mod geo;
pub mod repositories;

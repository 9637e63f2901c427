//! Geo DNS Cache Application Layer
//!
//! Ports describe the collaborators (store, geolocation, upstream network);
//! use cases hold the request lifecycle built on top of them.
pub mod ports;
pub mod use_cases;

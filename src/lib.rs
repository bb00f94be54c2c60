//! Client library for the Qualtrics survey platform
//!
//! This crate binds two generations of the Qualtrics REST APIs:
//! - the legacy Research Suite / Contacts v2.x API (query and form
//!   parameters, JSON envelope with a `Meta` status block),
//! - the v3 Response Export API (JSON request bodies, `X-API-TOKEN`
//!   header, zip-compressed file payloads).
//!
//! The heart of the crate is the pair of request dispatchers in
//! [`transport`], which translate the platform's heterogeneous
//! responses (enveloped JSON, bare JSON, raw XML, binary zip) into a
//! uniform [`Result`] classification. Everything else is a thin typed
//! wrapper around one remote operation each.
//!
//! # Example
//! ```ignore
//! use qualtrics_client::prelude::*;
//!
//! let client = Qualtrics::from_env()?;
//! let surveys = client.get_surveys()?;
//! for (survey_id, metadata) in &surveys {
//!     println!("{survey_id}: {metadata}");
//! }
//! ```
//!
//! All calls are synchronous and block for the duration of the network
//! round trip. The client holds no mutable per-call state, so a single
//! instance can be shared freely across threads.

/// High-level wrappers, one method per remote operation
pub mod application;
/// The `Qualtrics` client type and constructors
pub mod client;
/// Configuration and credential handling
pub mod config;
/// Endpoint URLs and other fixed values
pub mod constants;
/// Error taxonomy for every failure mode of the platform
pub mod error;
/// Request builders, response envelopes and the operation policy table
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// The legacy and export request dispatchers
pub mod transport;
/// Environment, logging and CSV helpers
pub mod utils;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the library as a string
pub fn version() -> &'static str {
    VERSION
}

/// Export API request and progress types
pub mod export;
/// Per-operation policy records for the legacy dispatcher
pub mod operation;
/// Legacy request builder and parameter assembly
pub mod request;
/// Response envelopes for both API generations
pub mod response;
/// Serde helpers shared by the request models
pub mod serialization;

pub use export::*;
pub use operation::*;
pub use request::*;
pub use response::*;

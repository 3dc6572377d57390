//! Shared ids, actors, errors, and canton codes.
//!
//! Everything here is framework-free: actors carry their roles explicitly,
//! and authorization is an ordinary function of actor and record.

pub mod cantons;
mod error;
mod types;

pub use cantons::is_known_canton_code;
pub use error::*;
pub use types::*;

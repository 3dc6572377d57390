//! Camp application workflow.
//!
//! A camp is filed with the cantonal authority once its safety and location
//! data is complete. Submission is gated on the camp's designated coach or
//! leader; checkpoint flags can only be set by the person they designate.

mod submission;
pub mod supercamp;
mod types;
mod update;

pub use submission::*;
pub use types::*;
pub use update::*;

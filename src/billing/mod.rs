//! Invoice configuration and ESR payment-slip arithmetic.
//!
//! Each group carries at most one [`InvoiceConfig`] holding its billing
//! identity and payment-slip variant. Validation collects field-level
//! errors; an update is blocked until all of them are corrected.

mod config;
pub mod payment_slip;
mod registry;
mod validation;

pub use config::*;
pub use registry::*;
pub use validation::*;

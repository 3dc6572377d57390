//! # lagerwerk
//!
//! Back-office core for federated Swiss associations (national body,
//! cantonal associations, local groups): payment-slip and invoice
//! configuration validation, and the camp application workflow.
//!
//! All validation is non-fatal: violations are accumulated as field-level
//! [`ValidationError`](core::ValidationError)s and reported to the caller,
//! never raised mid-check. Side effects such as mail delivery stay with the
//! caller — a successful camp submission returns exactly one mail value to
//! enqueue.
//!
//! ## Quick Start
//!
//! ```rust
//! use lagerwerk::billing::{payment_slip, InvoiceConfig, PaymentSlip};
//! use lagerwerk::billing::{validate_config, ValidationContext};
//! use lagerwerk::core::GroupId;
//!
//! // Recursive modulo-10 check digit, as printed on ESR payment slips.
//! assert_eq!(payment_slip::check_digit("01162"), Some(5));
//!
//! let config = InvoiceConfig {
//!     payee: Some("Pfadi Muster\n3000 Bern".into()),
//!     address: Some("Pfadi Muster, Postfach, 3000 Bern".into()),
//!     account_number: Some("01-162-5".into()),
//!     iban: Some("CH93 0076 2011 6238 5295 7".into()),
//!     payment_slip: PaymentSlip::Es,
//!     ..InvoiceConfig::new(GroupId(42))
//! };
//!
//! assert!(validate_config(&config, ValidationContext::Update).is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Shared ids, actors/roles, errors, canton codes |
//! | `billing` | Invoice configuration, ESR check digits & references |
//! | `camp` | Camp application workflow (submission, checkpoints, supercamps) |
//! | `all` | Everything |
//!
//! All features are enabled by default.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "billing")]
pub mod billing;

#[cfg(feature = "camp")]
pub mod camp;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

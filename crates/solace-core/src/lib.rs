//! # solace-core
//!
//! Shared vocabulary for the Solace quote matcher:
//!
//! - [`QuoteRecord`]: one immutable corpus entry (quote text, attribution,
//!   emotion tag, sentiment counters, optional embedding)
//! - [`constants`]: package name/version and the display placeholders
//!   substituted for missing fields at load time
//! - [`logging`]: `tracing` subscriber setup and, behind the `test-utils`
//!   feature, an in-memory capture layer for assertions

#![deny(unsafe_code)]

pub mod constants;
pub mod logging;
pub mod record;

pub use record::QuoteRecord;

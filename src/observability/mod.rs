//! Observability module.
//!
//! This module bootstraps structured logging. Field mutations in the domain
//! types emit `trace` events; nothing is written to stdout.

pub mod logging;

pub use logging::init_logging;

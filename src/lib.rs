//! Office Contact - a person with an office telephone number.
//!
//! A [`Person`] owns exactly one [`TelephoneNumber`] and exposes its office
//! area code and office number through forwarding accessors. The owned
//! number is never handed out, so callers depend only on the person's API.
//!
//! # Architecture
//!
//! - **domain**: The `TelephoneNumber` value object
//! - **models**: The `Person` model delegating to its telephone number
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for configuration loading
//! - **observability**: Logging bootstrap

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use config::Config;
pub use domain::{TelephoneNumber, UNSET_PLACEHOLDER};
pub use error::{ConfigError, ConfigResult};
pub use models::Person;
pub use observability::init_logging;

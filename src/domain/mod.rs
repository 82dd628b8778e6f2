//! Domain value objects.
//!
//! This module contains the telephone number value object that a person
//! delegates its office contact details to.

pub mod telephone_number;

pub use telephone_number::{TelephoneNumber, UNSET_PLACEHOLDER};

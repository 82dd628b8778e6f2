//! Data models built on top of the domain value objects.

pub mod person;

pub use person::Person;

//! TelephoneNumber value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text rendered in place of an unset area code or number.
pub const UNSET_PLACEHOLDER: &str = "";

/// An office telephone number made of an area code and a local number.
///
/// Both parts are free-form strings. No format validation is performed, so
/// empty or malformed values are stored as given. A freshly created number
/// has neither part set.
///
/// # Example
///
/// ```
/// use office_contact::domain::TelephoneNumber;
///
/// let mut phone = TelephoneNumber::new();
/// phone.set_area_code("123");
/// phone.set_number("4567890");
/// assert_eq!(phone.formatted(), "(123) 4567890");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TelephoneNumber {
    /// Area code prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    area_code: Option<String>,

    /// Local (subscriber) number
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
}

impl TelephoneNumber {
    /// Create an empty telephone number.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the area code, if one has been set.
    pub fn area_code(&self) -> Option<&str> {
        self.area_code.as_deref()
    }

    /// Set the area code. Any string is accepted, including an empty one.
    pub fn set_area_code(&mut self, area_code: impl Into<String>) {
        let area_code = area_code.into();
        tracing::trace!(field = "area_code", len = area_code.len(), "Telephone number updated");
        self.area_code = Some(area_code);
    }

    /// Get the local number, if one has been set.
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Set the local number. Any string is accepted, including an empty one.
    pub fn set_number(&mut self, number: impl Into<String>) {
        let number = number.into();
        tracing::trace!(field = "number", len = number.len(), "Telephone number updated");
        self.number = Some(number);
    }

    /// Whether both the area code and the number have been set.
    pub fn is_complete(&self) -> bool {
        self.area_code.is_some() && self.number.is_some()
    }

    /// Format as `(area_code) number`.
    ///
    /// Unset parts render as [`UNSET_PLACEHOLDER`].
    pub fn formatted(&self) -> String {
        self.formatted_with(UNSET_PLACEHOLDER)
    }

    /// Format as `(area_code) number`, rendering unset parts as `placeholder`.
    pub fn formatted_with(&self, placeholder: &str) -> String {
        compose(self.area_code(), self.number(), placeholder)
    }
}

/// Compose the `(area_code) number` form from its two optional parts.
pub(crate) fn compose(area_code: Option<&str>, number: Option<&str>, placeholder: &str) -> String {
    format!(
        "({}) {}",
        area_code.unwrap_or(placeholder),
        number.unwrap_or(placeholder)
    )
}

impl fmt::Display for TelephoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

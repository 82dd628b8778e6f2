//! Person model with office telephone details.

use crate::domain::telephone_number::{compose, UNSET_PLACEHOLDER};
use crate::domain::TelephoneNumber;
use serde::{Deserialize, Serialize};

/// A person with a name and an office telephone number.
///
/// The telephone number is owned exclusively by the person and is created
/// together with it. It is never handed out: the office area code and
/// office number are read and written through forwarding accessors, so the
/// internal representation can change without touching this API.
///
/// # Example
///
/// ```
/// use office_contact::Person;
///
/// let mut person = Person::new();
/// person.set_office_area_code("123");
/// person.set_office_number("4567890");
/// assert_eq!(person.telephone_number(), "(123) 4567890");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    name: Option<String>,
    telephone_number: TelephoneNumber,
}

/// Flat serialized shape of a [`Person`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct PersonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    office_area_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    office_number: Option<String>,
}

impl Person {
    /// Create a person with no name and an empty telephone number.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a person with the given name and an empty telephone number.
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut person = Self::new();
        person.set_name(name);
        person
    }

    /// Get the name, if one has been set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name. No validation is performed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Get the office area code from the owned telephone number.
    pub fn office_area_code(&self) -> Option<&str> {
        self.telephone_number.area_code()
    }

    /// Set the area code on the owned telephone number.
    pub fn set_office_area_code(&mut self, area_code: impl Into<String>) {
        self.telephone_number.set_area_code(area_code);
    }

    /// Get the office number from the owned telephone number.
    pub fn office_number(&self) -> Option<&str> {
        self.telephone_number.number()
    }

    /// Set the local number on the owned telephone number.
    pub fn set_office_number(&mut self, number: impl Into<String>) {
        self.telephone_number.set_number(number);
    }

    /// Office telephone number formatted as `(area_code) number`.
    ///
    /// Unset parts render as [`UNSET_PLACEHOLDER`].
    pub fn telephone_number(&self) -> String {
        self.telephone_number_with(UNSET_PLACEHOLDER)
    }

    /// Office telephone number with unset parts rendered as `placeholder`.
    pub fn telephone_number_with(&self, placeholder: &str) -> String {
        compose(self.office_area_code(), self.office_number(), placeholder)
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        let mut person = Person {
            name: record.name,
            telephone_number: TelephoneNumber::new(),
        };
        if let Some(area_code) = record.office_area_code {
            person.set_office_area_code(area_code);
        }
        if let Some(number) = record.office_number {
            person.set_office_number(number);
        }
        person
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        PersonRecord {
            office_area_code: person.office_area_code().map(str::to_owned),
            office_number: person.office_number().map(str::to_owned),
            name: person.name,
        }
    }
}

//! Integration tests for a person delegating its office telephone details.

use office_contact::{Person, TelephoneNumber};

/// A person stores an office telephone number and reads it back formatted.
#[test]
fn test_person_stores_telephone_number() {
    let mut person = Person::new();

    person.set_office_area_code("123");
    person.set_office_number("4567890");

    assert_eq!(person.telephone_number(), "(123) 4567890");
}

/// The formatted number is `(area) number` for arbitrary strings.
#[test]
fn test_telephone_number_for_arbitrary_strings() {
    let cases = [
        ("", ""),
        ("0", "1"),
        ("+44", "20 7946 0018"),
        ("(", ")"),
        ("☎", "数字"),
        ("  ", "\t"),
    ];

    for (area_code, number) in cases {
        let mut person = Person::new();
        person.set_office_area_code(area_code);
        person.set_office_number(number);

        assert_eq!(
            person.telephone_number(),
            format!("({}) {}", area_code, number),
            "area_code={:?} number={:?}",
            area_code,
            number
        );
    }
}

/// Reading back returns the last value written.
#[test]
fn test_last_write_wins() {
    let mut person = Person::new();

    for value in ["111", "222", ""] {
        person.set_office_area_code(value);
        person.set_office_number(value);
        assert_eq!(person.office_area_code(), Some(value));
        assert_eq!(person.office_number(), Some(value));
    }
}

/// Two people never share telephone state.
#[test]
fn test_people_have_independent_numbers() {
    let mut alice = Person::with_name("Alice");
    let mut bob = Person::with_name("Bob");

    alice.set_office_area_code("123");
    alice.set_office_number("4567890");
    bob.set_office_area_code("987");

    assert_eq!(alice.telephone_number(), "(123) 4567890");
    assert_eq!(bob.telephone_number(), "(987) ");

    let mut carol = alice.clone();
    carol.set_office_number("0000000");
    assert_eq!(alice.office_number(), Some("4567890"));
    assert_eq!(carol.office_number(), Some("0000000"));
}

/// An unset office number still formats, with an empty slot by default.
#[test]
fn test_unset_office_number_formats_without_panic() {
    let mut person = Person::new();
    person.set_office_area_code("123");

    assert_eq!(person.office_number(), None);
    assert_eq!(person.telephone_number(), "(123) ");
    assert_eq!(person.telephone_number_with("undefined"), "(123) undefined");

    let blank = Person::new();
    assert_eq!(blank.telephone_number(), "() ");
}

/// The name is independent of the telephone number.
#[test]
fn test_name_round_trip() {
    let mut person = Person::new();
    person.set_office_area_code("123");
    person.set_name("Martin");

    assert_eq!(person.name(), Some("Martin"));
    assert_eq!(person.telephone_number(), "(123) ");

    person.set_name("");
    assert_eq!(person.name(), Some(""));
}

/// A person formats exactly like a standalone telephone number with the same parts.
#[test]
fn test_person_matches_telephone_number() {
    let mut person = Person::new();
    let mut phone = TelephoneNumber::new();

    person.set_office_area_code("555");
    phone.set_area_code("555");
    assert_eq!(person.telephone_number(), phone.formatted());

    person.set_office_number("0100");
    phone.set_number("0100");
    assert_eq!(person.telephone_number(), phone.formatted());
    assert_eq!(person.telephone_number(), phone.to_string());
}

#![allow(clippy::float_cmp)]

use alloc::{string::ToString, vec, vec::Vec};

use quickcheck_macros::quickcheck;
use rstest::rstest;

use super::arbitrary::DocumentPlan;
use crate::{Document, Error, Value, ValueType};

fn sample() -> Document {
    let mut doc = Document::new();
    let section = doc.add_section("Section").unwrap();
    doc.add_string(section, "Key", "Value").unwrap();
    doc.add_float(section, "Number", 1.0).unwrap();
    doc
}

#[test]
fn sections_keep_insertion_order() {
    let mut doc = Document::new();
    for name in ["zeta", "alpha", "Mid"] {
        doc.add_section(name).unwrap();
    }
    let names: Vec<_> = doc.sections().map(|s| s.name()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "Mid"]);
}

#[test]
fn duplicate_section_is_rejected() {
    let mut doc = sample();
    let before = doc.to_string();
    assert_eq!(
        doc.add_section("Section"),
        Err(Error::DuplicateKey("Section".into()))
    );
    assert_eq!(doc.to_string(), before);
    // Names are case-sensitive.
    assert!(doc.add_section("section").is_ok());
}

#[test]
fn duplicate_key_is_rejected() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    assert_eq!(
        doc.add_float(section, "Key", 2.0),
        Err(Error::DuplicateKey("Key".into()))
    );
    assert_eq!(
        doc.add_pair(section, "Number"),
        Err(Error::DuplicateKey("Number".into()))
    );
    assert_eq!(doc.find_string(section, "Key").unwrap(), Some("Value"));
    assert_eq!(doc.section(section).unwrap().len(), 2);
}

#[rstest]
#[case("")]
#[case("a]b")]
#[case("line\nbreak")]
fn bad_section_names(#[case] name: &str) {
    let mut doc = Document::new();
    assert!(matches!(
        doc.add_section(name),
        Err(Error::InvalidArgument(_))
    ));
    assert!(doc.is_empty());
}

#[rstest]
#[case("")]
#[case("a=b")]
#[case("line\nbreak")]
#[case(" padded")]
#[case("trail ")]
#[case("\tk")]
#[case("k\r")]
#[case("#hash")]
#[case("[bracket")]
fn bad_keys(#[case] key: &str) {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    assert!(matches!(
        doc.add_float(section, key, 1.0),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(doc.section(section).unwrap().len(), 2);
}

#[test]
fn string_values_reject_newlines() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    let pair = doc.find_pair(section, "Key").unwrap();
    assert!(matches!(
        doc.set_string(pair, "two\nlines"),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(doc.get_string(pair).unwrap(), "Value");
}

#[test]
fn typed_accessors_check_the_tag() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    let key = doc.find_pair(section, "Key").unwrap();
    let number = doc.find_pair(section, "Number").unwrap();

    assert_eq!(
        doc.get_float(key),
        Err(Error::TypeMismatch {
            expected: ValueType::Float,
            found: ValueType::String
        })
    );
    assert_eq!(
        doc.get_string(number),
        Err(Error::TypeMismatch {
            expected: ValueType::String,
            found: ValueType::Float
        })
    );
    assert!(doc.find_int(section, "Number").is_err());
    assert_eq!(doc.get_string(key).unwrap(), "Value");
    assert_eq!(doc.get_float(number).unwrap(), 1.0);

    let empty = doc.add_pair(section, "Empty").unwrap();
    assert_eq!(doc.value(empty).unwrap(), Value::Invalid);
    assert_eq!(
        doc.get_string(empty),
        Err(Error::TypeMismatch {
            expected: ValueType::String,
            found: ValueType::Invalid
        })
    );
}

#[test]
fn missing_lookups_are_none() {
    let doc = sample();
    let section = doc.find_section("Section").unwrap();
    assert!(doc.find_section("Nope").is_none());
    assert!(doc.find_pair(section, "Nope").is_none());
    assert_eq!(doc.find_string(section, "Nope").unwrap(), None);
    assert_eq!(doc.find_value(section, "Nope"), None);
}

#[test]
fn float_set_reuses_storage() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    let number = doc.find_pair(section, "Number").unwrap();

    let used = doc.arena().allocated_bytes();
    doc.set_float(number, 2.5).unwrap();
    assert_eq!(doc.arena().allocated_bytes(), used);
    assert_eq!(doc.get_float(number).unwrap(), 2.5);

    doc.set_int(number, 7).unwrap();
    assert_eq!(doc.arena().allocated_bytes(), used + 8);
    doc.set_int(number, 8).unwrap();
    assert_eq!(doc.arena().allocated_bytes(), used + 8);
    assert_eq!(doc.get_int(number).unwrap(), 8);
}

#[test]
fn string_set_always_allocates() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    let key = doc.find_pair(section, "Key").unwrap();

    let used = doc.arena().allocated_bytes();
    doc.set_string(key, "Other").unwrap();
    assert_eq!(doc.arena().allocated_bytes(), used + 5);
    doc.set_float(key, 3.0).unwrap();
    assert_eq!(doc.arena().allocated_bytes(), used + 13);
    assert_eq!(doc.value(key).unwrap(), Value::Float(3.0));
}

#[test]
fn setting_invalid_is_rejected() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    let key = doc.find_pair(section, "Key").unwrap();
    assert!(matches!(
        doc.set_value(key, Value::Invalid),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        doc.add_value(section, "New", Value::Invalid),
        Err(Error::InvalidArgument(_))
    ));
    assert!(doc.find_pair(section, "New").is_none());
}

#[test]
fn find_and_set() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    doc.find_and_set_string(section, "Key", "Changed").unwrap();
    doc.find_and_set_float(section, "Number", -1.0).unwrap();
    assert_eq!(doc.find_string(section, "Key").unwrap(), Some("Changed"));
    assert_eq!(doc.find_float(section, "Number").unwrap(), Some(-1.0));
    assert!(matches!(
        doc.find_and_set_int(section, "Missing", 1),
        Err(Error::InvalidArgument(_))
    ));
    assert!(doc.find_pair(section, "Missing").is_none());
}

#[test]
fn remove_pair_unlinks_only_that_pair() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    let key = doc.find_pair(section, "Key").unwrap();
    let used = doc.arena().allocated_bytes();

    doc.remove_pair(section, key).unwrap();
    let keys: Vec<_> = doc.pairs(section).map(|p| p.key()).collect();
    assert_eq!(keys, vec!["Number"]);
    assert_eq!(doc.arena().allocated_bytes(), used);

    assert!(matches!(
        doc.remove_pair(section, key),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(doc.key(key), Err(Error::InvalidArgument(_))));
    // The key is free again.
    doc.add_string(section, "Key", "Again").unwrap();
    doc.assert_invariants();
    assert!(matches!(
        doc.find_and_remove_pair(section, "Nope"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn remove_section_invalidates_handle() {
    let mut doc = sample();
    let section = doc.find_section("Section").unwrap();
    let key = doc.find_pair(section, "Key").unwrap();
    doc.remove_section(section).unwrap();

    // Pairs go with their section.
    assert!(matches!(doc.key(key), Err(Error::InvalidArgument(_))));
    assert!(matches!(doc.value(key), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        doc.set_float(key, 2.0),
        Err(Error::InvalidArgument(_))
    ));

    assert!(doc.is_empty());
    assert!(doc.section(section).is_none());
    assert!(doc.find_pair(section, "Key").is_none());
    assert_eq!(doc.pairs(section).count(), 0);
    assert!(matches!(
        doc.remove_section(section),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        doc.add_pair(section, "Key"),
        Err(Error::InvalidArgument(_))
    ));
    // The name can be reused by a fresh section.
    let fresh = doc.add_section("Section").unwrap();
    assert_ne!(fresh, section);
    assert_eq!(doc.last_section(), Some(fresh));
    doc.assert_invariants();
}

#[test]
fn accepted_keys_read_back_unchanged() {
    let mut doc = Document::new();
    let section = doc.add_section("S").unwrap();
    for key in ["inner space", "a#b", "a[b]", "dotted.key", "ünï"] {
        doc.add_float(section, key, 1.0).unwrap();
    }
    assert_eq!(Document::parse(&doc.to_string()).unwrap(), doc);
}

#[test]
fn int_values_read_back_as_floats() {
    let mut doc = Document::new();
    let section = doc.add_section("S").unwrap();
    doc.add_int(section, "n", 5).unwrap();
    let read = Document::parse(&doc.to_string()).unwrap();
    let section = read.find_section("S").unwrap();
    assert_eq!(read.find_value(section, "n"), Some(Value::Float(5.0)));
}

#[test]
fn int_values_render_as_integers() {
    let mut doc = Document::new();
    let section = doc.add_section("S").unwrap();
    doc.add_int(section, "n", i64::MIN).unwrap();
    assert_eq!(doc.to_string(), "[S]\nn = -9223372036854775808\n");
    assert_eq!(doc.find_int(section, "n").unwrap(), Some(i64::MIN));
}

#[test]
fn parse_is_strict() {
    let doc: Document = "[Section]\nKey = \"Value\"\nNumber = 1\n".parse().unwrap();
    assert_eq!(doc, sample());
    assert!(Document::parse("[Section\n").is_err());
}

#[quickcheck]
fn re_adding_existing_names_changes_nothing(plan: DocumentPlan) -> bool {
    let mut doc = plan.build();
    for (name, pairs) in &plan.0 {
        if doc.add_section(name) != Err(Error::DuplicateKey(name.clone())) {
            return false;
        }
        let section = doc.find_section(name).unwrap();
        for (key, _) in pairs {
            if doc.add_float(section, key, 0.0) != Err(Error::DuplicateKey(key.clone())) {
                return false;
            }
        }
    }
    doc.assert_invariants();
    doc == plan.build()
}

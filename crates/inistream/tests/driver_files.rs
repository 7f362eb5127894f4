#![expect(missing_docs)]
#![allow(clippy::float_cmp)]

use std::fs;

use inistream::{
    Document, DriverOptions,
    driver::{DriverError, read_file, write_file},
};

const INI: &str = "[Section]\nKey = \"Value\"\nNumber = 1\n";

fn assert_sample(doc: &Document) {
    let section = doc.sections().next().expect("one section");
    assert_eq!(section.name(), "Section");
    let mut pairs = section.pairs();
    let key = pairs.next().expect("first pair");
    assert_eq!(key.key(), "Key");
    assert_eq!(doc.get_string(key.id()).unwrap(), "Value");
    let number = pairs.next().expect("second pair");
    assert_eq!(number.key(), "Number");
    assert_eq!(doc.get_float(number.id()).unwrap(), 1.0);
    assert!(pairs.next().is_none());
}

#[test]
fn read_file_then_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ini");
    fs::write(&input, INI).unwrap();

    let (doc, report) = read_file(&input, &DriverOptions::default()).unwrap();
    assert!(report.is_clean());
    assert_sample(&doc);

    let output = dir.path().join("out.ini");
    let report = write_file(&doc, &output, &DriverOptions::default()).unwrap();
    assert!(report.skipped_keys.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), INI);
}

#[test]
fn built_document_writes_expected_text() {
    let mut doc = Document::new();
    let section = doc.add_section("Section").unwrap();
    doc.add_string(section, "Key", "Value").unwrap();
    doc.add_float(section, "Number", 1.0).unwrap();
    assert_sample(&doc);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("built.ini");
    let tiny = DriverOptions {
        buffer_size: 1,
        ..Default::default()
    };
    write_file(&doc, &output, &tiny).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), INI);

    let (read, _) = read_file(&output, &tiny).unwrap();
    assert_eq!(read, doc);
}

#[test]
fn large_file_through_small_buffers() {
    let mut text = String::new();
    for s in 0..50 {
        text.push_str(&format!("[Section{s}]\n"));
        for k in 0..20 {
            text.push_str(&format!("key{k} = {}\nname{k} = \"value {s}/{k}\"\n", s * 100 + k));
        }
    }
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("large.ini");
    fs::write(&input, &text).unwrap();

    let options = DriverOptions {
        buffer_size: 17,
        ..Default::default()
    };
    let (doc, report) = read_file(&input, &options).unwrap();
    assert!(report.is_clean());
    assert_eq!(doc.len(), 50);
    assert!(doc.arena().block_count() > 1);

    let output = dir.path().join("large_out.ini");
    write_file(&doc, &output, &options).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), text);
}

#[test]
fn custom_placeholder_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.ini");
    fs::write(&input, "[BadHeader\nKey = \"x\"\n").unwrap();

    let options = DriverOptions {
        placeholder_prefix: "Recovered".into(),
        ..Default::default()
    };
    let (doc, report) = read_file(&input, &options).unwrap();
    assert_eq!(report.placeholders, vec!["Recovered0".to_string()]);
    let section = doc.find_section("Recovered0").unwrap();
    assert_eq!(doc.find_string(section, "Key").unwrap(), Some("x"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_file(dir.path().join("absent.ini"), &DriverOptions::default()).unwrap_err();
    assert!(matches!(err, DriverError::Io(_)));
}

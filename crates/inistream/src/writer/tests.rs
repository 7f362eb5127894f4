use alloc::{string::String, vec, vec::Vec};

use rstest::rstest;

use super::*;

fn sample() -> Document {
    let mut doc = Document::new();
    let section = doc.add_section("Section").unwrap();
    doc.add_string(section, "Key", "Value").unwrap();
    doc.add_float(section, "Number", 1.0).unwrap();
    let other = doc.add_section("Other").unwrap();
    doc.add_int(other, "count", -42).unwrap();
    doc.add_float(other, "tiny", 2.5e-9).unwrap();
    doc
}

/// Drain `doc` through chunks of `size` bytes, collecting output and the
/// number of `Continue` results.
fn render(doc: &Document, size: usize) -> (Vec<u8>, usize, Vec<WriteError>) {
    let mut writer = StreamWriter::new();
    let mut rendered = Vec::new();
    let mut continues = 0;
    let mut errors = Vec::new();
    let mut chunk = vec![0u8; size];
    loop {
        let mut out = &mut chunk[..];
        let result = writer.drain(doc, &mut out);
        let written = size - out.len();
        rendered.extend_from_slice(&chunk[..written]);
        match result {
            Ok(Drain::Complete) => break,
            Ok(Drain::Continue) => continues += 1,
            Err(err) => errors.push(err),
        }
    }
    (rendered, continues, errors)
}

const SAMPLE: &str = "[Section]\nKey = \"Value\"\nNumber = 1\n[Other]\ncount = -42\ntiny = 2.5e-9\n";

#[test]
fn renders_whole_document_in_one_chunk() {
    let (rendered, continues, errors) = render(&sample(), 4096);
    assert_eq!(String::from_utf8(rendered).unwrap(), SAMPLE);
    assert_eq!(continues, 0);
    assert!(errors.is_empty());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
#[case(10)]
#[case(64)]
fn small_chunks_concatenate_to_full_rendering(#[case] size: usize) {
    let (rendered, continues, errors) = render(&sample(), size);
    assert_eq!(String::from_utf8(rendered).unwrap(), SAMPLE);
    assert!(errors.is_empty());
    if size < 10 {
        assert!(continues > 0);
    }
}

#[test]
fn empty_document_completes_immediately() {
    let doc = Document::new();
    let mut writer = StreamWriter::new();
    let mut chunk = [0u8; 8];
    let mut out = &mut chunk[..];
    assert_eq!(writer.drain(&doc, &mut out).unwrap(), Drain::Complete);
    assert_eq!(out.len(), 8);
}

#[test]
fn section_without_pairs() {
    let mut doc = Document::new();
    doc.add_section("A").unwrap();
    doc.add_section("B").unwrap();
    let (rendered, _, _) = render(&doc, 16);
    assert_eq!(rendered, b"[A]\n[B]\n");
}

#[test]
fn invalid_pair_is_skipped_and_reported() {
    let mut doc = Document::new();
    let section = doc.add_section("S").unwrap();
    doc.add_float(section, "before", 1.0).unwrap();
    let empty = doc.add_pair(section, "empty").unwrap();
    doc.add_float(section, "after", 2.0).unwrap();

    let (rendered, _, errors) = render(&doc, 5);
    assert_eq!(rendered, b"[S]\nbefore = 1\nafter = 2\n");
    assert_eq!(
        errors,
        vec![WriteError::InvalidType {
            pair: empty,
            key: "empty".into()
        }]
    );
    assert!(errors[0].is_recoverable());
}

#[test]
fn pending_tracks_staged_bytes() {
    let mut doc = Document::new();
    doc.add_section("Section").unwrap();
    let mut writer = StreamWriter::new();
    let mut chunk = [0u8; 4];
    let mut out = &mut chunk[..];
    assert_eq!(writer.drain(&doc, &mut out).unwrap(), Drain::Continue);
    assert_eq!(&chunk, b"[Sec");
    assert_eq!(writer.pending(), 6);
}

#[test]
fn reset_renders_again() {
    let doc = sample();
    let mut writer = StreamWriter::new();
    let mut first = vec![0u8; 4096];
    let mut out = &mut first[..];
    assert_eq!(writer.drain(&doc, &mut out).unwrap(), Drain::Complete);

    writer.reset();
    let mut second = vec![0u8; 4096];
    let mut out = &mut second[..];
    assert_eq!(writer.drain(&doc, &mut out).unwrap(), Drain::Complete);
    assert_eq!(first, second);
}

#[test]
fn removed_entries_are_not_rendered() {
    let mut doc = sample();
    let other = doc.find_section("Other").unwrap();
    doc.find_and_remove_pair(other, "count").unwrap();
    let section = doc.find_section("Section").unwrap();
    doc.remove_section(section).unwrap();

    let (rendered, _, _) = render(&doc, 9);
    assert_eq!(rendered, b"[Other]\ntiny = 2.5e-9\n");
}

#[test]
fn display_matches_streamed_output() {
    let doc = sample();
    let (rendered, _, _) = render(&doc, 3);
    assert_eq!(alloc::string::ToString::to_string(&doc).as_bytes(), rendered);
}

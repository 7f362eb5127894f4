#![no_main]
use arbitrary::Arbitrary;
use inistream::{Document, ReadError, StreamReader};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    split_seed: u64,
    data: Vec<u8>,
}

/// Feed `chunks` through one reader, resuming after every recoverable error.
fn read<'a>(chunks: impl Iterator<Item = &'a [u8]>) -> (Document, Vec<ReadError>) {
    let mut doc = Document::new();
    let mut reader = StreamReader::new();
    let mut errors = Vec::new();
    for chunk in chunks {
        let mut input = chunk;
        while let Err(err) = reader.feed(&mut doc, &mut input) {
            assert!(err.is_recoverable(), "unbounded arena failed: {err}");
            errors.push(err);
        }
    }
    if let Err(err) = reader.finish(&mut doc) {
        errors.push(err);
    }
    doc.assert_invariants();
    (doc, errors)
}

/// Split `data` into pieces of at least one byte whose sizes derive from
/// `split_seed`. Pieces may end inside a UTF-8 sequence.
fn split(data: &[u8], mut split_seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let size = (split_seed as usize % rest.len()) + 1;
        split_seed = split_seed.rotate_left(7) ^ size as u64;
        let (head, tail) = rest.split_at(size);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

fn reader(input: &Input) {
    let (whole, whole_errors) = read(core::iter::once(&input.data[..]));
    let (chunked, chunked_errors) = read(split(&input.data, input.split_seed).into_iter());

    // Compare renderings rather than documents so NaN values compare equal.
    let rendered = whole.to_string();
    assert_eq!(rendered, chunked.to_string());
    assert_eq!(whole_errors, chunked_errors);

    // A rendered document reads back to itself.
    let (reread, errors) = read(core::iter::once(rendered.as_bytes()));
    assert!(errors.is_empty(), "rendered text failed to read: {errors:?}");
    assert_eq!(reread.to_string(), rendered);
}

fuzz_target!(|input: Input| reader(&input));

//! Tests for fixed-size sequence building.

use std::rc::Rc;

use tola_prims::prelude::*;
use tola_prims::{FixedSeqBuilder, SeqError, try_fixed_seq};

// =============================================================================
// fixed_seq!
// =============================================================================

#[test]
fn test_length_and_order() {
    let seq = fixed_seq![i32; 1, 2, 3];
    assert_eq!(seq.len(), 3);
    assert_eq!(seq, [1, 2, 3]);
}

#[test]
fn test_zero_arguments() {
    let seq = fixed_seq![i32];
    assert_eq!(seq.len(), 0);

    let seq = fixed_seq![String;];
    assert!(seq.is_empty());
}

#[test]
fn test_trailing_comma() {
    let seq: FixedSeq<i64, 2> = fixed_seq![i64; 1i8, 2i16,];
    assert_eq!(seq, [1, 2]);
}

#[test]
fn test_arguments_are_moved_not_cloned() {
    let shared = Rc::new(5u8);
    let first = Rc::clone(&shared);
    let second = Rc::clone(&shared);
    assert_eq!(Rc::strong_count(&shared), 3);

    let seq = fixed_seq![Rc<u8>; first, second];
    // Two handles moved in, none cloned.
    assert_eq!(Rc::strong_count(&shared), 3);
    assert_eq!(*seq[1], 5);

    drop(seq);
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_arguments_evaluated_in_order() {
    let mut log = Vec::new();
    let mut next = |tag: &'static str| {
        log.push(tag);
        tag.len()
    };
    let seq = fixed_seq![usize; next("a"), next("bb"), next("ccc")];
    assert_eq!(seq, [1, 2, 3]);
    assert_eq!(log, ["a", "bb", "ccc"]);
}

#[test]
fn test_converting_arguments() {
    let words = fixed_seq![String; "x", String::from("y"), 'z'];
    assert_eq!(words, ["x", "y", "z"]);
}

// =============================================================================
// build_fixed_seq
// =============================================================================

#[test]
fn test_build_from_heterogeneous_tuple() {
    let seq = build_fixed_seq::<u64, _>((1u8, 2u16, 3u32, 4u64));
    assert_eq!(seq, [1, 2, 3, 4]);
}

#[test]
fn test_build_from_unit() {
    let seq: [u8; 0] = build_fixed_seq::<u8, _>(());
    assert_eq!(seq.len(), 0);
}

#[test]
fn test_build_from_array() {
    let seq = build_fixed_seq::<String, _>(["a", "b"]);
    assert_eq!(seq, ["a", "b"]);
}

#[test]
fn test_build_max_arity() {
    let seq = build_fixed_seq::<u32, _>((
        0u8, 1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u16, 9u16, 10u16, 11u16, 12u32, 13u32, 14u32,
        15u32,
    ));
    assert_eq!(seq.len(), 16);
    assert!(seq.iter().enumerate().all(|(i, &v)| v as usize == i));
}

#[test]
fn test_len_is_compile_time() {
    const LEN: usize = <(u8, u8, u8) as IntoFixedSeq<u32>>::LEN;
    let buffer = [0u32; LEN];
    assert_eq!(buffer.len(), 3);
}

// =============================================================================
// Runtime-checked
// =============================================================================

#[test]
fn test_builder_fills_in_order() {
    let mut builder = FixedSeqBuilder::<u32, 3>::new();
    assert!(builder.is_empty());
    for value in [10u8, 20, 30] {
        builder.push(value).unwrap();
    }
    assert!(builder.is_full());
    assert_eq!(builder.remaining(), 0);
    assert_eq!(builder.finish(), Ok([10, 20, 30]));
}

#[test]
fn test_builder_overflow_keeps_contents() {
    let mut builder = FixedSeqBuilder::<char, 1>::default();
    builder.push('a').unwrap();
    assert_eq!(builder.push('b'), Err(SeqError::Overflow { capacity: 1 }));
    assert_eq!(builder.finish(), Ok(['a']));
}

#[test]
fn test_try_fixed_seq_exact() {
    let seq: [String; 2] = try_fixed_seq(["p", "q"]).unwrap();
    assert_eq!(seq, ["p", "q"]);
}

#[test]
fn test_try_fixed_seq_mismatch() {
    let short = try_fixed_seq::<u8, 4, _>(vec![1u8, 2]);
    assert_eq!(short, Err(SeqError::LengthMismatch { expected: 4, found: 2 }));

    let long = try_fixed_seq::<u8, 1, _>(vec![1u8, 2]);
    assert_eq!(long, Err(SeqError::Overflow { capacity: 1 }));

    let empty = try_fixed_seq::<u8, 0, _>(Vec::<u8>::new());
    assert_eq!(empty, Ok([]));
}

#[test]
fn test_error_messages() {
    let err = SeqError::LengthMismatch { expected: 4, found: 2 };
    assert_eq!(err.to_string(), "expected 4 elements, found 2");
    assert_eq!(
        SeqError::Overflow { capacity: 1 }.to_string(),
        "more than 1 elements supplied"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "expected 4 elements, found 2");
}

#[test]
fn test_sequence_renders() {
    let seq = fixed_seq![u16; 4u8, 5u8];
    assert_eq!(seq.render_to_string(), "[4, 5]");
}

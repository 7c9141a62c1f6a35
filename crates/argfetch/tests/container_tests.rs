//! Tests for `&mut Vec<T>` slots in both sizing modes.
//!
//! A non-empty vec is pre-sized and demands exactly `len` tokens; an empty
//! vec is auto-sized by scanning up to the next identifier-shaped token.

use argfetch::{FetchError, ScalarKind, fetch};
use pretty_assertions::assert_eq;

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_owned()).collect()
}

// =============================================================================
// 1. pre-sized
// =============================================================================

/// A pre-sized vec consumes exactly `len` homogeneous tokens.
#[test]
fn presized_consumes_exactly_len_tokens() {
    let args = args(&["--nums", "1.5", "2.5", "3.5", "4.5", "tail"]);
    let mut nums = vec![0.0_f64; 4];
    assert!(fetch(&args, "--nums", &mut nums).unwrap());
    assert_eq!(nums, [1.5, 2.5, 3.5, 4.5]);
}

/// Fewer trailing tokens than `len` is an arity error, not a short read.
#[test]
fn presized_shortfall_is_an_arity_error() {
    let args = args(&["--nums", "1", "2"]);
    let mut nums = vec![0_i32; 4];
    let err = fetch(&args, "--nums", &mut nums).unwrap_err();
    assert_eq!(
        err,
        FetchError::Arity {
            identifier: "--nums".to_owned(),
            expected: 4,
            available: 2,
        }
    );
    assert_eq!(nums, [0, 0, 0, 0]);
}

/// An identifier-shaped token inside the extent means the values ran out.
#[test]
fn presized_extent_cut_short_by_next_identifier() {
    let args = args(&["--nums", "1", "--other", "3"]);
    let mut nums = vec![0_i32; 3];
    let err = fetch(&args, "--nums", &mut nums).unwrap_err();
    assert_eq!(
        err,
        FetchError::Arity {
            identifier: "--nums".to_owned(),
            expected: 3,
            available: 1,
        }
    );
}

/// A failing conversion mid-extent leaves the vec exactly as it was.
#[test]
fn presized_failure_writes_nothing() {
    let args = args(&["--nums", "1", "abc"]);
    let mut nums = vec![9_i32, 9];
    let err = fetch(&args, "--nums", &mut nums).unwrap_err();
    assert_eq!(
        err,
        FetchError::Conversion {
            identifier: "--nums".to_owned(),
            expected: ScalarKind::I32,
            token: "abc".to_owned(),
        }
    );
    assert_eq!(nums, [9, 9]);
}

/// Pre-sized vecs work for strings as well as numbers.
#[test]
fn presized_string_vec() {
    let args = args(&["--words", "alpha", "beta"]);
    let mut words = vec![String::new(); 2];
    assert!(fetch(&args, "--words", &mut words).unwrap());
    assert_eq!(words, ["alpha", "beta"]);
}

// =============================================================================
// 2. auto-sized
// =============================================================================

/// An empty vec is resized to the tokens before the next identifier.
#[test]
fn autosized_scans_until_next_identifier() {
    let args = args(&["--nums", "1", "2", "3", "--other"]);
    let mut nums: Vec<i64> = Vec::new();
    assert!(fetch(&args, "--nums", &mut nums).unwrap());
    assert_eq!(nums, [1, 2, 3]);
}

/// Without a following identifier the scan runs to the end of the sequence.
#[test]
fn autosized_scans_to_the_end() {
    let args = args(&["prog", "--nums", "10", "20"]);
    let mut nums: Vec<u32> = Vec::new();
    assert!(fetch(&args, "--nums", &mut nums).unwrap());
    assert_eq!(nums, [10, 20]);
}

/// An identifier directly followed by another identifier yields an empty
/// extent: found, zero elements.
#[test]
fn autosized_empty_extent_is_found_with_no_elements() {
    let args = args(&["--nums", "--other", "1"]);
    let mut nums: Vec<i64> = Vec::new();
    assert!(fetch(&args, "--nums", &mut nums).unwrap());
    assert!(nums.is_empty());
}

/// A negative number is indistinguishable from an identifier under the
/// prefix heuristic, so the scan stops in front of it.
#[test]
fn autosized_stops_at_negative_numbers() {
    let args = args(&["--nums", "1", "-5", "2"]);
    let mut nums: Vec<i64> = Vec::new();
    assert!(fetch(&args, "--nums", &mut nums).unwrap());
    assert_eq!(nums, [1]);
}

/// A conversion failure in an auto-sized extent leaves the vec empty.
#[test]
fn autosized_failure_writes_nothing() {
    let args = args(&["--nums", "1", "x", "3"]);
    let mut nums: Vec<i64> = Vec::new();
    let err = fetch(&args, "--nums", &mut nums).unwrap_err();
    assert_eq!(
        err,
        FetchError::Conversion {
            identifier: "--nums".to_owned(),
            expected: ScalarKind::I64,
            token: "x".to_owned(),
        }
    );
    assert!(nums.is_empty());
}

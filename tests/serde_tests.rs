#![cfg(feature = "serde")]

//! Integration tests for serde support in ordkit.
//!
//! These tests verify that the plain data types serialize to the expected
//! JSON shapes and deserialize back.

use ordkit::error::ErrorKind;
use rstest::rstest;

// =============================================================================
// ErrorKind
// =============================================================================

#[rstest]
fn test_error_kind_json_roundtrip() {
    let json = serde_json::to_string(&ErrorKind::OutOfBounds).unwrap();
    assert_eq!(json, "\"OutOfBounds\"");

    let restored: ErrorKind = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ErrorKind::OutOfBounds);
}

// =============================================================================
// Termination
// =============================================================================

#[cfg(feature = "sequence")]
mod termination {
    use ordkit::sequence::Termination;
    use rstest::rstest;

    #[rstest]
    #[case(Termination::FixedLength(5), r#"{"FixedLength":5}"#)]
    #[case(Termination::TortoiseHare, r#""TortoiseHare""#)]
    #[case(Termination::SeenSet, r#""SeenSet""#)]
    fn test_termination_json_shape(#[case] termination: Termination, #[case] expected: &str) {
        let json = serde_json::to_string(&termination).unwrap();
        assert_eq!(json, expected);

        let restored: Termination = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, termination);
    }

    #[rstest]
    fn test_termination_rejects_negative_length() {
        let result: Result<Termination, _> = serde_json::from_str(r#"{"FixedLength":-1}"#);
        assert!(result.is_err());
    }
}

// =============================================================================
// OrderedArray and SearchOutcome
// =============================================================================

#[cfg(feature = "ordered")]
mod ordered {
    use ordkit::ordered::{OrderedArray, SearchOutcome};
    use rstest::rstest;

    #[rstest]
    fn test_ordered_array_serializes_as_sequence() {
        let array = OrderedArray::new(vec![3, 1, 2]);
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, "[3,1,2]");
    }

    #[rstest]
    fn test_ordered_array_deserializes_with_natural_order() {
        let mut array: OrderedArray<String> =
            serde_json::from_str(r#"["pear","apple","fig"]"#).unwrap();
        array.sort();
        assert_eq!(array.as_slice(), &["apple", "fig", "pear"]);
    }

    #[rstest]
    fn test_ordered_array_with_comparator_serializes_buffer_only() {
        let array = OrderedArray::with_comparator(vec![1.5, -2.0], f64::total_cmp);
        assert_eq!(serde_json::to_string(&array).unwrap(), "[1.5,-2.0]");
    }

    #[rstest]
    fn test_search_outcome_json_roundtrip() {
        let found = SearchOutcome::Found(4);
        let missing = SearchOutcome::NotFound(0);

        let found_json = serde_json::to_string(&found).unwrap();
        let missing_json = serde_json::to_string(&missing).unwrap();
        assert_eq!(found_json, r#"{"Found":4}"#);
        assert_eq!(missing_json, r#"{"NotFound":0}"#);

        assert_eq!(serde_json::from_str::<SearchOutcome>(&found_json).unwrap(), found);
        assert_eq!(serde_json::from_str::<SearchOutcome>(&missing_json).unwrap(), missing);
    }
}

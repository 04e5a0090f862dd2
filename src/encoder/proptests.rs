//! Property tests for the hashing encoder.

use super::*;
use crate::token::Token;
use proptest::prelude::*;

fn any_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        any::<i64>().prop_map(Token::Int),
        "[a-zA-Z0-9 _-]{0,24}".prop_map(Token::Str),
    ]
}

proptest! {
    /// Every bucket lands in [0, num_bins), whatever the config.
    #[test]
    fn prop_bucket_in_range(
        token in any_token(),
        num_bins in 1_u64..10_000,
        salt in proptest::option::of(any::<(u64, u64)>())
    ) {
        let mut encoder = HashingEncoder::new(num_bins).expect("valid bins");
        if let Some(salt) = salt {
            encoder = encoder.with_salt(salt);
        }
        prop_assert!(encoder.bucket(&token) < num_bins);
    }

    /// Bucketing is a pure function of (token, config).
    #[test]
    fn prop_bucket_deterministic(
        token in any_token(),
        num_bins in 1_u64..1_000,
        salt in any::<(u64, u64)>()
    ) {
        let a = HashingEncoder::new(num_bins).expect("valid bins").with_salt(salt);
        let b = HashingEncoder::new(num_bins).expect("valid bins").with_salt(salt);
        prop_assert_eq!(a.bucket(&token), b.bucket(&token));
    }

    /// With more than one bin, the mask token owns bucket 0 exclusively.
    #[test]
    fn prop_mask_owns_bucket_zero(
        mask in any_token(),
        token in any_token(),
        num_bins in 2_u64..1_000
    ) {
        let encoder = HashingEncoder::new(num_bins)
            .expect("valid bins")
            .with_mask_value(mask.clone());
        prop_assert_eq!(encoder.bucket(&mask), 0);
        if token != mask {
            prop_assert!(encoder.bucket(&token) >= 1);
        }
    }

    /// A single-word salt is indistinguishable from its doubled pair.
    #[test]
    fn prop_scalar_salt_expansion(
        token in any_token(),
        num_bins in 1_u64..1_000,
        word in any::<u64>()
    ) {
        let single = HashingEncoder::new(num_bins).expect("valid bins").with_salt(word);
        let pair = HashingEncoder::new(num_bins)
            .expect("valid bins")
            .with_salt((word, word));
        prop_assert_eq!(single.bucket(&token), pair.bucket(&token));
    }

    /// Integer tokens bucket exactly like their decimal text rendition.
    #[test]
    fn prop_int_buckets_as_decimal_text(
        n in any::<i64>(),
        num_bins in 1_u64..10_000
    ) {
        let encoder = HashingEncoder::new(num_bins).expect("valid bins");
        prop_assert_eq!(
            encoder.bucket(&Token::Int(n)),
            encoder.bucket(&Token::Str(n.to_string()))
        );
    }

    /// Ragged transforms keep the row structure for arbitrary splits.
    #[test]
    fn prop_ragged_structure_preserved(
        lengths in proptest::collection::vec(0_usize..6, 0..8),
        num_bins in 1_u64..100
    ) {
        let mut row_splits = vec![0_usize];
        for len in &lengths {
            row_splits.push(row_splits.last().expect("non-empty") + len);
        }
        let total = *row_splits.last().expect("non-empty");
        let values: Vec<Token> = (0..total).map(|i| Token::Int(i as i64)).collect();
        let input = FeatureArray::ragged(values, row_splits.clone()).expect("valid ragged");

        let encoder = HashingEncoder::new(num_bins).expect("valid bins");
        let output = encoder.transform(&input);
        match output {
            FeatureArray::Ragged { values, row_splits: out_splits } => {
                prop_assert_eq!(out_splits, row_splits);
                prop_assert_eq!(values.len(), total);
            }
            other => prop_assert!(false, "expected ragged output, got {:?}", other),
        }
    }
}

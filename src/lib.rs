//! Cubeta: deterministic categorical feature hashing in pure Rust.
//!
//! Cubeta implements the "hashing trick": it maps arbitrary string or
//! integer tokens into a fixed number of buckets without building or
//! storing a vocabulary. Bucket assignments are stable across platforms,
//! process runs, and implementations — the unsalted path reproduces
//! FarmHash64 (`Fingerprint64`) bucketing bit-exactly, the salted path
//! reproduces SipHash-2-4 — so buckets baked into a trained model keep
//! their meaning wherever the model is served.
//!
//! # Quick Start
//!
//! ```
//! use cubeta::prelude::*;
//!
//! // Three buckets, no salt: FarmHash64 bucketing.
//! let encoder = HashingEncoder::new(3).unwrap();
//! let tokens: Vec<Token> = ["A", "B", "C", "D", "E"].iter().map(|&s| s.into()).collect();
//! assert_eq!(encoder.transform_tokens(&tokens), vec![1, 0, 1, 1, 2]);
//!
//! // Reserve bucket 0 for the empty string.
//! let masked = HashingEncoder::new(3).unwrap().with_mask_value("");
//! assert_eq!(masked.bucket(&Token::from("")), 0);
//! ```
//!
//! # Modules
//!
//! - [`encoder`]: The [`HashingEncoder`](encoder::HashingEncoder) engine,
//!   its salt handling, and configuration persistence
//! - [`hash`]: FarmHash64 and SipHash-2-4 primitives
//! - [`token`]: Categorical [`Token`](token::Token) values and their
//!   canonical byte form
//! - [`array`]: Dense/sparse/ragged [`FeatureArray`](array::FeatureArray)
//!   shape envelopes
//! - [`error`]: Crate error type and `Result` alias

pub mod array;
pub mod encoder;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod token;

//! Categorical feature hashing (the "hashing trick").
//!
//! [`HashingEncoder`] maps string or integer tokens into a fixed number of
//! buckets without learning or storing a vocabulary. Bucket assignment is
//! deterministic across platforms and process runs: unsalted encoders use
//! the FarmHash64 fingerprint, salted encoders use SipHash-2-4 keyed by
//! the salt. Collisions are expected and accepted; hashing is lossy by
//! construction.

use crate::array::FeatureArray;
use crate::error::{CubetaError, Result};
use crate::hash::HashFamily;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Salt for the keyed hashing path.
///
/// A single word `s` is shorthand for the pair `(s, s)`; the pair forms
/// the 128-bit SipHash key. Zero salt is legal but provides no
/// obfuscation.
///
/// The serde form is untagged (a bare integer or a 2-element array), so a
/// persisted salt of any other arity fails to deserialize instead of being
/// silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salt {
    /// One word, expanded to `(s, s)`.
    Single(u64),
    /// Two independent key words.
    Pair(u64, u64),
}

impl Salt {
    /// The normalized 2-word form used for hashing and persistence.
    #[must_use]
    pub fn normalized(self) -> (u64, u64) {
        match self {
            Salt::Single(s) => (s, s),
            Salt::Pair(a, b) => (a, b),
        }
    }
}

impl From<u64> for Salt {
    fn from(s: u64) -> Self {
        Salt::Single(s)
    }
}

impl From<(u64, u64)> for Salt {
    fn from((a, b): (u64, u64)) -> Self {
        Salt::Pair(a, b)
    }
}

impl TryFrom<&[u64]> for Salt {
    type Error = CubetaError;

    /// Builds a salt from a runtime-sized word list, enforcing the 1-or-2
    /// word arity of the reference interface.
    fn try_from(words: &[u64]) -> Result<Self> {
        match *words {
            [s] => Ok(Salt::Single(s)),
            [a, b] => Ok(Salt::Pair(a, b)),
            _ => Err(CubetaError::InvalidHyperparameter {
                param: "salt".to_string(),
                value: format!("{} words", words.len()),
                constraint: "a single integer or a pair of integers".to_string(),
            }),
        }
    }
}

/// The full, serializable configuration of a [`HashingEncoder`].
///
/// Round-trips without information loss; the salt is always stored in its
/// normalized 2-word form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Total number of buckets, including the mask bucket if any.
    pub num_bins: u64,
    /// Token reserved to bucket 0, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_value: Option<Token>,
    /// Normalized salt words, if the keyed hash is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<(u64, u64)>,
}

/// Hashes categorical tokens into `[0, num_bins)`.
///
/// The encoder is immutable after construction and holds no per-call
/// state: calls are pure, element-independent, and safe from any number
/// of threads without locking.
///
/// When `mask_value` is set and `num_bins > 1`, bucket 0 is reserved for
/// the mask token and every other token maps into `[1, num_bins)`. With
/// `num_bins == 1` there is no usable non-mask bucket, so the reservation
/// is skipped and everything maps to 0.
///
/// # Examples
///
/// ```
/// use cubeta::encoder::HashingEncoder;
/// use cubeta::token::Token;
///
/// let encoder = HashingEncoder::new(3).unwrap();
/// let tokens: Vec<Token> = ["A", "B", "C", "D", "E"].iter().map(|&s| s.into()).collect();
/// assert_eq!(encoder.transform_tokens(&tokens), vec![1, 0, 1, 1, 2]);
/// ```
///
/// With a salt, the keyed hash family is used instead:
///
/// ```
/// use cubeta::encoder::HashingEncoder;
/// use cubeta::token::Token;
///
/// let encoder = HashingEncoder::new(3).unwrap().with_salt((133, 137));
/// let tokens: Vec<Token> = ["A", "B", "C", "D", "E"].iter().map(|&s| s.into()).collect();
/// assert_eq!(encoder.transform_tokens(&tokens), vec![1, 2, 1, 0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashingConfig", into = "HashingConfig")]
pub struct HashingEncoder {
    num_bins: u64,
    mask_value: Option<Token>,
    salt: Option<(u64, u64)>,
}

impl HashingEncoder {
    /// Creates an encoder with `num_bins` buckets and no mask or salt.
    ///
    /// # Errors
    ///
    /// Returns `CubetaError::InvalidHyperparameter` if `num_bins` is 0.
    pub fn new(num_bins: u64) -> Result<Self> {
        if num_bins == 0 {
            return Err(CubetaError::InvalidHyperparameter {
                param: "num_bins".to_string(),
                value: num_bins.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        Ok(Self {
            num_bins,
            mask_value: None,
            salt: None,
        })
    }

    /// Reserves bucket 0 for `mask`.
    ///
    /// The comparison against the mask is typed: `Token::Int(10)` does not
    /// mask `Token::Str("10")` even though both hash identically.
    #[must_use]
    pub fn with_mask_value(mut self, mask: impl Into<Token>) -> Self {
        self.mask_value = Some(mask.into());
        self
    }

    /// Switches to the keyed hash family under `salt`.
    ///
    /// Accepts a single word or a pair; a single word `s` behaves exactly
    /// like `(s, s)`.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Salt>) -> Self {
        self.salt = Some(salt.into().normalized());
        self
    }

    /// Total number of buckets.
    #[must_use]
    pub fn num_bins(&self) -> u64 {
        self.num_bins
    }

    /// The mask token, if configured.
    #[must_use]
    pub fn mask_value(&self) -> Option<&Token> {
        self.mask_value.as_ref()
    }

    /// The normalized salt words, if configured.
    #[must_use]
    pub fn salt(&self) -> Option<(u64, u64)> {
        self.salt
    }

    fn family(&self) -> HashFamily {
        match self.salt {
            Some((k0, k1)) => HashFamily::Sip(k0, k1),
            None => HashFamily::Farm,
        }
    }

    /// Maps one token to its bucket in `[0, num_bins)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubeta::encoder::HashingEncoder;
    /// use cubeta::token::Token;
    ///
    /// let encoder = HashingEncoder::new(3).unwrap().with_mask_value("");
    /// assert_eq!(encoder.bucket(&Token::from("")), 0);
    /// assert_ne!(encoder.bucket(&Token::from("A")), 0);
    /// ```
    #[must_use]
    pub fn bucket(&self, token: &Token) -> u64 {
        // Mask reservation only exists when a non-mask bucket remains.
        let mask_active = self.num_bins > 1 && self.mask_value.is_some();
        if mask_active && self.mask_value.as_ref() == Some(token) {
            return 0;
        }
        let available = if mask_active {
            self.num_bins - 1
        } else {
            self.num_bins
        };
        let h = self.family().hash(&token.hash_bytes());
        let raw = h % available;
        if mask_active {
            raw + 1
        } else {
            raw
        }
    }

    /// Rebuckets every element of a batch, preserving its structure.
    ///
    /// Dense stays dense with the same shape; sparse keeps its indices and
    /// dense shape; ragged keeps its row splits. Only values change.
    #[must_use]
    pub fn transform(&self, input: &FeatureArray<Token>) -> FeatureArray<u64> {
        input.map(|token| self.bucket(token))
    }

    /// Flat convenience over [`HashingEncoder::bucket`] for a token slice.
    #[must_use]
    pub fn transform_tokens(&self, tokens: &[Token]) -> Vec<u64> {
        tokens.iter().map(|t| self.bucket(t)).collect()
    }

    /// The encoder's full configuration.
    #[must_use]
    pub fn config(&self) -> HashingConfig {
        HashingConfig {
            num_bins: self.num_bins,
            mask_value: self.mask_value.clone(),
            salt: self.salt,
        }
    }

    /// Reconstructs an encoder from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `CubetaError::InvalidHyperparameter` if the configuration's
    /// `num_bins` is 0.
    pub fn from_config(config: HashingConfig) -> Result<Self> {
        let encoder = Self::new(config.num_bins)?;
        Ok(Self {
            mask_value: config.mask_value,
            salt: config.salt,
            ..encoder
        })
    }

    /// Saves the configuration as JSON.
    ///
    /// # Errors
    ///
    /// Returns `CubetaError::Io` if the file cannot be created, or
    /// `CubetaError::Serialization` if encoding fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.config())?;
        Ok(())
    }

    /// Loads an encoder from a JSON configuration written by [`HashingEncoder::save`].
    ///
    /// # Errors
    ///
    /// Returns `CubetaError::Io` if the file cannot be read,
    /// `CubetaError::Serialization` if decoding fails, or
    /// `CubetaError::InvalidHyperparameter` if the stored `num_bins` is 0.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: HashingConfig = serde_json::from_reader(BufReader::new(file))?;
        Self::from_config(config)
    }
}

impl TryFrom<HashingConfig> for HashingEncoder {
    type Error = CubetaError;

    fn try_from(config: HashingConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

impl From<HashingEncoder> for HashingConfig {
    fn from(encoder: HashingEncoder) -> Self {
        encoder.config()
    }
}


#[cfg(test)]
mod proptests;

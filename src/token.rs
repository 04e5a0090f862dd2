//! Categorical tokens and their canonical byte form.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single categorical input value: an integer or a text string.
///
/// Integers and strings are distinct as values (`Token::Int(10) !=
/// Token::Str("10")`, which matters for mask comparison), but they share a
/// canonical byte form for hashing: integers are rendered as decimal ASCII
/// text, so `Token::Int(10)` and `Token::from("10")` land in the same
/// bucket. This mirrors the reference implementation, where integer inputs
/// are converted to strings before bucketing, and keeps bucket assignments
/// compatible with models trained on string-typed renditions of the same
/// feature.
///
/// # Examples
///
/// ```
/// use cubeta::token::Token;
///
/// let city = Token::from("london");
/// let id = Token::from(42_i64);
/// assert_eq!(id.hash_bytes().as_ref(), b"42");
/// assert_ne!(city, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// Integer token. Covers the signed 32/64-bit inputs of the reference.
    Int(i64),
    /// Text token, hashed as its UTF-8 bytes.
    Str(String),
}

impl Token {
    /// Canonical byte sequence fed to the hash function.
    ///
    /// Strings borrow their UTF-8 bytes; integers allocate their decimal
    /// text (with a leading `-` for negatives, no other adornment).
    #[must_use]
    pub fn hash_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Token::Str(s) => Cow::Borrowed(s.as_bytes()),
            Token::Int(n) => Cow::Owned(n.to_string().into_bytes()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{n}"),
            Token::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Str(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Str(s)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Int(n)
    }
}

impl From<i32> for Token {
    fn from(n: i32) -> Self {
        Token::Int(i64::from(n))
    }
}

impl From<u32> for Token {
    fn from(n: u32) -> Self {
        Token::Int(i64::from(n))
    }
}

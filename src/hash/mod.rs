//! Stable 64-bit hash functions for categorical bucketing.
//!
//! Two hash families are provided behind one construction-time choice:
//!
//! - [`farmhash64`]: fast, unkeyed FarmHash64 fingerprint, used when no
//!   salt is configured.
//! - [`siphash64`]: keyed SipHash-2-4, used when a salt is configured.
//!
//! Both are platform- and endianness-independent: the same bytes hash to
//! the same 64-bit value everywhere, which is what makes hashed buckets
//! safe to bake into trained models.

mod farm;
mod sip;

pub use farm::farmhash64;
pub use sip::siphash64;

/// Construction-time selection between the two hash families.
///
/// The salted variant carries its normalized key words, so the choice is a
/// plain tagged value rather than a runtime flag or function pointer.
///
/// # Examples
///
/// ```
/// use cubeta::hash::{farmhash64, siphash64, HashFamily};
///
/// assert_eq!(HashFamily::Farm.hash(b"A"), farmhash64(b"A"));
/// assert_eq!(HashFamily::Sip(133, 137).hash(b"A"), siphash64((133, 137), b"A"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFamily {
    /// Unkeyed FarmHash64 fingerprint.
    Farm,
    /// SipHash-2-4 keyed by the two salt words.
    Sip(u64, u64),
}

impl HashFamily {
    /// Hashes `data` under this family.
    #[must_use]
    pub fn hash(&self, data: &[u8]) -> u64 {
        match self {
            HashFamily::Farm => farmhash64(data),
            HashFamily::Sip(k0, k1) => siphash64((*k0, *k1), data),
        }
    }
}

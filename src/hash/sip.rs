//! SipHash-2-4 keyed 64-bit hash.
//!
//! Used for the salted bucketing path: the 128-bit key (two 64-bit words)
//! makes bucket assignments unpredictable without the salt and hardens the
//! layout against adversarially chosen tokens. This is the reference
//! SipHash-2-4 parameterization (2 compression rounds per message word,
//! 4 finalization rounds), so it reproduces keyed-hash buckets bit-exactly.
//! Not a cryptographic commitment: collisions still exist and are accepted.

#[inline]
fn sip_round(v0: &mut u64, v1: &mut u64, v2: &mut u64, v3: &mut u64) {
    *v0 = v0.wrapping_add(*v1);
    *v1 = v1.rotate_left(13);
    *v1 ^= *v0;
    *v0 = v0.rotate_left(32);

    *v2 = v2.wrapping_add(*v3);
    *v3 = v3.rotate_left(16);
    *v3 ^= *v2;

    *v0 = v0.wrapping_add(*v3);
    *v3 = v3.rotate_left(21);
    *v3 ^= *v0;

    *v2 = v2.wrapping_add(*v1);
    *v1 = v1.rotate_left(17);
    *v1 ^= *v2;
    *v2 = v2.rotate_left(32);
}

/// Hashes a byte sequence to 64 bits under a 128-bit key.
///
/// The key is given as two 64-bit words `(k0, k1)`. A key of `(0, 0)` is
/// legal input, though it offers no obfuscation.
///
/// # Examples
///
/// ```
/// use cubeta::hash::siphash64;
///
/// // Test vector from the SipHash reference paper (key 0x00..0f,
/// // message 0x00..0e).
/// let key = (0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);
/// let msg: Vec<u8> = (0u8..15).collect();
/// assert_eq!(siphash64(key, &msg), 0xa129_ca61_49be_45e5);
/// ```
#[must_use]
pub fn siphash64(key: (u64, u64), data: &[u8]) -> u64 {
    let (k0, k1) = key;
    let mut v0 = k0 ^ 0x736f_6d65_7073_6575;
    let mut v1 = k1 ^ 0x646f_7261_6e64_6f6d;
    let mut v2 = k0 ^ 0x6c79_6765_6e65_7261;
    let mut v3 = k1 ^ 0x7465_6462_7974_6573;

    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        let m = u64::from_le_bytes(buf);
        v3 ^= m;
        sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
        sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
        v0 ^= m;
    }

    // Tail word: remaining bytes little-endian, input length in the top byte.
    let mut tail = (data.len() as u64) << 56;
    for (i, byte) in chunks.remainder().iter().copied().enumerate() {
        tail |= u64::from(byte) << (i * 8);
    }
    v3 ^= tail;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= tail;

    v2 ^= 0xff;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);

    v0 ^ v1 ^ v2 ^ v3
}

//! FarmHash64 fingerprint (the `farmhashna` 64-bit variant).
//!
//! This is the deterministic hash behind `Fingerprint64`: output depends
//! only on the input bytes, never on platform, endianness, or build flags.
//! Models trained against buckets produced by this function can be served
//! anywhere and see identical bucket assignments, so the constants and
//! mixing schedule below must never change.

/// Some primes between 2^63 and 2^64 (from the reference implementation).
const K0: u64 = 0xc3a5_c85c_97cb_3127;
const K1: u64 = 0xb492_b66f_be98_f273;
const K2: u64 = 0x9ae1_6a3b_2f90_404f;

#[inline]
fn fetch64(data: &[u8], i: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[i..i + 8]);
    u64::from_le_bytes(buf)
}

#[inline]
fn fetch32(data: &[u8], i: usize) -> u64 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[i..i + 4]);
    u64::from(u32::from_le_bytes(buf))
}

#[inline]
fn shift_mix(val: u64) -> u64 {
    val ^ (val >> 47)
}

#[inline]
fn hash_len_16(u: u64, v: u64, mul: u64) -> u64 {
    let mut a = (u ^ v).wrapping_mul(mul);
    a ^= a >> 47;
    let mut b = (v ^ a).wrapping_mul(mul);
    b ^= b >> 47;
    b.wrapping_mul(mul)
}

fn hash_len_0_to_16(data: &[u8]) -> u64 {
    let len = data.len();
    if len >= 8 {
        let mul = K2.wrapping_add(len as u64 * 2);
        let a = fetch64(data, 0).wrapping_add(K2);
        let b = fetch64(data, len - 8);
        let c = b.rotate_right(37).wrapping_mul(mul).wrapping_add(a);
        let d = a.rotate_right(25).wrapping_add(b).wrapping_mul(mul);
        return hash_len_16(c, d, mul);
    }
    if len >= 4 {
        let mul = K2.wrapping_add(len as u64 * 2);
        let a = fetch32(data, 0);
        return hash_len_16((len as u64).wrapping_add(a << 3), fetch32(data, len - 4), mul);
    }
    if len > 0 {
        let a = u64::from(data[0]);
        let b = u64::from(data[len >> 1]);
        let c = u64::from(data[len - 1]);
        let y = a.wrapping_add(b << 8);
        let z = (len as u64).wrapping_add(c << 2);
        return shift_mix(y.wrapping_mul(K2) ^ z.wrapping_mul(K0)).wrapping_mul(K2);
    }
    K2
}

fn hash_len_17_to_32(data: &[u8]) -> u64 {
    let len = data.len();
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch64(data, 0).wrapping_mul(K1);
    let b = fetch64(data, 8);
    let c = fetch64(data, len - 8).wrapping_mul(mul);
    let d = fetch64(data, len - 16).wrapping_mul(K2);
    hash_len_16(
        a.wrapping_add(b)
            .rotate_right(43)
            .wrapping_add(c.rotate_right(30))
            .wrapping_add(d),
        a.wrapping_add(b.wrapping_add(K2).rotate_right(18))
            .wrapping_add(c),
        mul,
    )
}

fn hash_len_33_to_64(data: &[u8]) -> u64 {
    let len = data.len();
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch64(data, 0).wrapping_mul(K2);
    let b = fetch64(data, 8);
    let c = fetch64(data, len - 8).wrapping_mul(mul);
    let d = fetch64(data, len - 16).wrapping_mul(K2);
    let y = a
        .wrapping_add(b)
        .rotate_right(43)
        .wrapping_add(c.rotate_right(30))
        .wrapping_add(d);
    let z = hash_len_16(
        y,
        a.wrapping_add(b.wrapping_add(K2).rotate_right(18))
            .wrapping_add(c),
        mul,
    );
    let e = fetch64(data, 16).wrapping_mul(mul);
    let f = fetch64(data, 24);
    let g = y.wrapping_add(fetch64(data, len - 32)).wrapping_mul(mul);
    let h = z.wrapping_add(fetch64(data, len - 24)).wrapping_mul(mul);
    hash_len_16(
        e.wrapping_add(f)
            .rotate_right(43)
            .wrapping_add(g.rotate_right(30))
            .wrapping_add(h),
        e.wrapping_add(f.wrapping_add(a).rotate_right(18))
            .wrapping_add(g),
        mul,
    )
}

/// 32-byte mix producing two seeded state words.
#[inline]
fn weak_hash_len_32_with_seeds(data: &[u8], i: usize, seed_a: u64, seed_b: u64) -> (u64, u64) {
    let w = fetch64(data, i);
    let x = fetch64(data, i + 8);
    let y = fetch64(data, i + 16);
    let z = fetch64(data, i + 24);

    let mut a = seed_a.wrapping_add(w);
    let mut b = seed_b.wrapping_add(a).wrapping_add(z).rotate_right(21);
    let c = a;
    a = a.wrapping_add(x).wrapping_add(y);
    b = b.wrapping_add(a.rotate_right(44));
    (a.wrapping_add(z), b.wrapping_add(c))
}

/// Hashes a byte sequence to a 64-bit fingerprint.
///
/// Produces output identical to FarmHash's `Hash64` / `Fingerprint64` for
/// every input length; golden values per length class are pinned in the
/// test suite.
///
/// # Examples
///
/// ```
/// use cubeta::hash::farmhash64;
///
/// assert_eq!(farmhash64(b""), 0x9ae1_6a3b_2f90_404f);
/// assert_eq!(farmhash64(b"a"), 0xb345_4265_b6df_75e3);
/// ```
#[must_use]
pub fn farmhash64(data: &[u8]) -> u64 {
    let len = data.len();
    if len <= 16 {
        return hash_len_0_to_16(data);
    }
    if len <= 32 {
        return hash_len_17_to_32(data);
    }
    if len <= 64 {
        return hash_len_33_to_64(data);
    }

    // Strings over 64 bytes: 56-byte rolling state over 64-byte chunks,
    // with the last 64 bytes re-read (possibly overlapping) at the end.
    const SEED: u64 = 81;
    let mut x = SEED.wrapping_mul(K2).wrapping_add(fetch64(data, 0));
    let mut y = SEED.wrapping_mul(K1).wrapping_add(113);
    let mut z = shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2);
    let mut v = (0u64, 0u64);
    let mut w = (0u64, 0u64);

    let end = ((len - 1) / 64) * 64;
    let last64 = end + ((len - 1) & 63) - 63;
    let mut s = 0usize;
    loop {
        x = x
            .wrapping_add(y)
            .wrapping_add(v.0)
            .wrapping_add(fetch64(data, s + 8))
            .rotate_right(37)
            .wrapping_mul(K1);
        y = y
            .wrapping_add(v.1)
            .wrapping_add(fetch64(data, s + 48))
            .rotate_right(42)
            .wrapping_mul(K1);
        x ^= w.1;
        y = y.wrapping_add(v.0).wrapping_add(fetch64(data, s + 40));
        z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(K1);
        v = weak_hash_len_32_with_seeds(data, s, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
        w = weak_hash_len_32_with_seeds(
            data,
            s + 32,
            z.wrapping_add(w.1),
            y.wrapping_add(fetch64(data, s + 16)),
        );
        std::mem::swap(&mut z, &mut x);
        s += 64;
        if s == end {
            break;
        }
    }

    // The tail re-mixes the last 64 bytes under a data-dependent
    // multiplier, not K1.
    let mul = K1.wrapping_add((z & 0xff) << 1);
    let s = last64;
    w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
    v.0 = v.0.wrapping_add(w.0);
    w.0 = w.0.wrapping_add(v.0);
    x = x
        .wrapping_add(y)
        .wrapping_add(v.0)
        .wrapping_add(fetch64(data, s + 8))
        .rotate_right(37)
        .wrapping_mul(mul);
    y = y
        .wrapping_add(v.1)
        .wrapping_add(fetch64(data, s + 48))
        .rotate_right(42)
        .wrapping_mul(mul);
    x ^= w.1.wrapping_mul(9);
    y = y
        .wrapping_add(v.0.wrapping_mul(9))
        .wrapping_add(fetch64(data, s + 40));
    z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(mul);
    v = weak_hash_len_32_with_seeds(data, s, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
    w = weak_hash_len_32_with_seeds(
        data,
        s + 32,
        z.wrapping_add(w.1),
        y.wrapping_add(fetch64(data, s + 16)),
    );
    std::mem::swap(&mut z, &mut x);

    hash_len_16(
        hash_len_16(v.0, w.0, mul)
            .wrapping_add(shift_mix(y).wrapping_mul(K0))
            .wrapping_add(z),
        hash_len_16(v.1, w.1, mul).wrapping_add(x),
        mul,
    )
}

//! Bijection between permutations of `0..n` and integers in `0..n!`.
//!
//! The code is the permutation's position in the factorial number system:
//! digit `k` (radix `k + 1`) records where value `k` sat after the values
//! above it were moved into place.

/// `n!` as a `u64`; exact for `n <= 20`.
pub fn factorial(n: usize) -> u64 {
    (1..=n as u64).product()
}

/// Whether `seq` is a permutation of `0..seq.len()`.
pub fn is_permutation(seq: &[u8]) -> bool {
    let mut seen = vec![false; seq.len()];
    seq.iter().all(|&v| {
        let v = usize::from(v);
        v < seen.len() && !std::mem::replace(&mut seen[v], true)
    })
}

/// Encodes a permutation.
///
/// # Panics
///
/// Panics if `seq` is not a permutation of `0..seq.len()`.
pub fn encode(seq: &[u8]) -> u64 {
    let mut scratch = Vec::with_capacity(seq.len());
    encode_with(seq, &mut scratch)
}

/// Encodes a permutation using `scratch` as the working array.
///
/// The buffer is overwritten; hot loops keep one around to avoid allocating.
pub fn encode_with(seq: &[u8], scratch: &mut Vec<u8>) -> u64 {
    scratch.clear();
    scratch.extend_from_slice(seq);
    let mut code = 0;
    for k in (0..scratch.len()).rev() {
        let i = match scratch[..=k].iter().position(|&v| usize::from(v) == k) {
            Some(i) => i,
            None => panic!("{seq:?} is not a permutation"),
        };
        code = code * (k as u64 + 1) + i as u64;
        scratch.swap(i, k);
    }
    code
}

/// Decodes the permutation of length `n` with the given code.
pub fn decode(code: u64, n: usize) -> Vec<u8> {
    let mut seq = Vec::with_capacity(n);
    decode_into(code, n, &mut seq);
    seq
}

/// Decodes into `out`, replacing its contents.
pub fn decode_into(mut code: u64, n: usize, out: &mut Vec<u8>) {
    debug_assert!(n <= 20 && code < factorial(n).max(1));
    out.clear();
    out.extend(0..n as u8);
    for r in 1..n {
        let radix = r as u64 + 1;
        let i = (code % radix) as usize;
        code /= radix;
        out.swap(i, r);
    }
}

//! The NIST SP 800-185 string-encoding primitives used to frame cSHAKE256
//! and KMACXOF256 inputs.
//!
//! All four encoders are length-prefixed framings of byte strings and
//! integers. Lengths are carried as `u128` bit counts, which keeps every
//! encodable value far below the 2^2040 ceiling the standard imposes on
//! `left_encode` and `right_encode`.

/// Encode `n` as its minimal big-endian byte string preceded by the byte
/// count: `[k, b_{k-1}, …, b_0]`. Zero encodes as `[1, 0]`.
pub fn left_encode(n: u128) -> Vec<u8> {
    let digits = be_digits(n);
    let mut out = Vec::with_capacity(digits.len() + 1);
    out.push(digits.len() as u8);
    out.extend_from_slice(&digits);
    out
}

/// Encode `n` as its minimal big-endian byte string followed by the byte
/// count: `[b_{k-1}, …, b_0, k]`. Zero encodes as `[0, 1]`.
pub fn right_encode(n: u128) -> Vec<u8> {
    let digits = be_digits(n);
    let mut out = Vec::with_capacity(digits.len() + 1);
    out.extend_from_slice(&digits);
    out.push(digits.len() as u8);
    out
}

/// Encode a byte string with its bit length: `left_encode(8·|s|) ‖ s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode(s.len() as u128 * 8);
    out.extend_from_slice(s);
    out
}

/// Prefix `x` with `left_encode(w)` and zero-pad the result to the smallest
/// positive multiple of `w`.
pub fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    assert!(w > 0, "bytepad width must be positive");
    let mut out = left_encode(w as u128);
    out.extend_from_slice(x);
    let rem = out.len() % w;
    if rem != 0 {
        out.resize(out.len() + (w - rem), 0);
    }
    out
}

// Minimal big-endian representation; zero is one zero byte.
fn be_digits(n: u128) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let skip = bytes
        .iter()
        .take_while(|&&b| b == 0)
        .count()
        .min(bytes.len() - 1);
    bytes[skip..].to_vec()
}

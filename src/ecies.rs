//! ECIES-style authenticated encryption over Ed448-Goldilocks.
//!
//! A key pair is derived from a passphrase: the private scalar is
//! `s = 4·KMACXOF256(pw, "", 448, "SK") mod r` (the factor of four clears
//! the cofactor) and the public key is `V = s·G`. Encryption picks an
//! ephemeral scalar `k`, computes the shared point `W = k·V` and the
//! transmitted point `Z = k·G`, and expands keys from the x coordinate of
//! `W`:
//!
//! ```text
//! ke ‖ ka = KMACXOF256(W.x, "", 896, "PK")
//! c       = KMACXOF256(ke, "", 8·|m|, "PKE") ⊕ m
//! t       = KMACXOF256(ka, m, 448, "PKA")
//! ```
//!
//! A cryptogram is `Z.x ‖ Z.y ‖ c ‖ t` with both coordinates in the
//! canonical 57-byte little-endian encoding and a 56-byte tag, so a
//! cryptogram is always exactly 170 bytes longer than its message.

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::ed448::{order, Point, COORD_LEN};
use crate::xof::kmac_xof256;
use crate::Error;

/// The length in bytes of the authentication tag (448 bits).
pub const TAG_LEN: usize = 56;

/// Cryptogram overhead: two coordinates plus the tag.
pub const OVERHEAD: usize = 2 * COORD_LEN + TAG_LEN;

/// A key pair derived from a passphrase.
pub struct KeyPair {
    s: BigUint,
    v: Point,
}

impl KeyPair {
    /// Derive the key pair for the given passphrase.
    pub fn from_passphrase(pw: &[u8]) -> KeyPair {
        let s = derive_scalar(pw);
        let v = Point::generator().scalar_mul(&s);
        KeyPair { s, v }
    }

    /// The public key `V = s·G`.
    pub fn public(&self) -> &Point {
        &self.v
    }

    /// The private scalar.
    pub fn secret(&self) -> &BigUint {
        &self.s
    }
}

/// Encrypt `msg` to the holder of the passphrase behind `public_key`,
/// drawing the ephemeral scalar seed from the operating system's CSPRNG.
pub fn encrypt(public_key: &Point, msg: &[u8]) -> Vec<u8> {
    encrypt_with_rng(public_key, msg, &mut OsRng)
}

/// Encrypt `msg` under `public_key`, drawing 56 bytes of ephemeral scalar
/// seed from the given RNG. The RNG is consulted exactly once.
pub fn encrypt_with_rng<R>(public_key: &Point, msg: &[u8], rng: &mut R) -> Vec<u8>
where
    R: CryptoRng + RngCore,
{
    let mut seed = Zeroizing::new([0u8; 56]);
    rng.fill_bytes(seed.as_mut());
    let k = (BigUint::from_bytes_be(seed.as_ref()) * 4u32) % order();

    let w = public_key.scalar_mul(&k);
    let z = Point::generator().scalar_mul(&k);
    let (ke, ka) = expand_keys(&w);

    let mut out = Vec::with_capacity(msg.len() + OVERHEAD);
    out.extend_from_slice(&z.to_bytes());
    let mut c = kmac_xof256(&ke, b"", msg.len() * 8, b"PKE");
    for (c_byte, m_byte) in c.iter_mut().zip(msg) {
        *c_byte ^= *m_byte;
    }
    out.extend_from_slice(&c);
    out.extend_from_slice(&kmac_xof256(&ka, msg, 448, b"PKA"));
    out
}

/// Decrypt a cryptogram produced by [`encrypt`] with the recipient's
/// passphrase.
///
/// Fails with [`Error::InvalidLength`] on truncated input,
/// [`Error::InvalidPoint`] if the transmitted point is not on the curve,
/// and [`Error::TagMismatch`] if authentication fails; no plaintext is
/// returned in any of these cases.
pub fn decrypt(cryptogram: &[u8], pw: &[u8]) -> Result<Vec<u8>, Error> {
    if cryptogram.len() < OVERHEAD {
        return Err(Error::InvalidLength(cryptogram.len()));
    }
    let (coords, rest) = cryptogram.split_at(2 * COORD_LEN);
    let (c, t) = rest.split_at(rest.len() - TAG_LEN);
    let z = Point::from_bytes(coords)?;

    let s = derive_scalar(pw);
    let w = z.scalar_mul(&s);
    let (ke, ka) = expand_keys(&w);

    let mut msg = kmac_xof256(&ke, b"", c.len() * 8, b"PKE");
    for (m_byte, c_byte) in msg.iter_mut().zip(c) {
        *m_byte ^= *c_byte;
    }
    let t_p = Zeroizing::new(kmac_xof256(&ka, &msg, 448, b"PKA"));
    if bool::from(t.ct_eq(&t_p)) {
        Ok(msg)
    } else {
        Err(Error::TagMismatch)
    }
}

// s = 4·KMACXOF256(pw, "", 448, "SK") mod r, big-endian digest decoding.
fn derive_scalar(pw: &[u8]) -> BigUint {
    let digest = Zeroizing::new(kmac_xof256(pw, b"", 448, b"SK"));
    (BigUint::from_bytes_be(&digest) * 4u32) % order()
}

// ke ‖ ka = KMACXOF256(W.x, "", 896, "PK"), split down the middle.
fn expand_keys(w: &Point) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let keys = Zeroizing::new(kmac_xof256(&w.x_bytes(), b"", 896, b"PK"));
    let ke = Zeroizing::new(keys[..56].to_vec());
    let ka = Zeroizing::new(keys[56..].to_vec());
    (ke, ka)
}

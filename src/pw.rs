//! Passphrase-based services: unkeyed digest, MAC, and symmetric
//! authenticated encryption, all built from KMACXOF256.
//!
//! A cryptogram is `salt ‖ ciphertext ‖ tag`: a 64-byte random salt, a
//! ciphertext the same length as the message, and a 64-byte tag, so a
//! cryptogram is always exactly 128 bytes longer than its message. The key
//! schedule derives a 512-bit encryption key and a 512-bit authentication
//! key from the salt and passphrase, XORs the message with a KMACXOF256
//! keystream, and tags the plaintext:
//!
//! ```text
//! ke ‖ ka = KMACXOF256(salt ‖ pw, "", 1024, "S")
//! c       = KMACXOF256(ke, "", 8·|m|, "SKE") ⊕ m
//! t       = KMACXOF256(ka, m, 512, "SKA")
//! ```

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::xof::kmac_xof256;
use crate::Error;

/// The length in bytes of the random salt prepended to a cryptogram.
pub const SALT_LEN: usize = 64;

/// The length in bytes of the authentication tag.
pub const TAG_LEN: usize = 64;

/// An unkeyed 512-bit digest: `KMACXOF256("", msg, 512, "D")`.
pub fn hash(msg: &[u8]) -> Vec<u8> {
    kmac_xof256(b"", msg, 512, b"D")
}

/// A 512-bit authentication tag on `msg` under `pw`:
/// `KMACXOF256(pw, msg, 512, "T")`.
pub fn tag(pw: &[u8], msg: &[u8]) -> Vec<u8> {
    kmac_xof256(pw, msg, 512, b"T")
}

/// Encrypt `msg` under the passphrase `pw` with a salt drawn from the
/// operating system's CSPRNG. Returns the cryptogram `salt ‖ c ‖ t`.
pub fn encrypt(msg: &[u8], pw: &[u8]) -> Vec<u8> {
    encrypt_with_rng(msg, pw, &mut OsRng)
}

/// Encrypt `msg` under the passphrase `pw`, drawing the salt from the given
/// RNG. The RNG is consulted exactly once.
pub fn encrypt_with_rng<R>(msg: &[u8], pw: &[u8], rng: &mut R) -> Vec<u8>
where
    R: CryptoRng + RngCore,
{
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    let (ke, ka) = expand_keys(&salt, pw);

    let mut out = Vec::with_capacity(SALT_LEN + msg.len() + TAG_LEN);
    out.extend_from_slice(&salt);
    let mut c = kmac_xof256(&ke, b"", msg.len() * 8, b"SKE");
    for (c_byte, m_byte) in c.iter_mut().zip(msg) {
        *c_byte ^= *m_byte;
    }
    out.extend_from_slice(&c);
    out.extend_from_slice(&kmac_xof256(&ka, msg, 512, b"SKA"));
    out
}

/// Decrypt a cryptogram produced by [`encrypt`].
///
/// Fails with [`Error::InvalidLength`] if the input cannot contain a salt
/// and tag, and with [`Error::TagMismatch`] if authentication fails; no
/// plaintext is returned in either case.
pub fn decrypt(cryptogram: &[u8], pw: &[u8]) -> Result<Vec<u8>, Error> {
    if cryptogram.len() < SALT_LEN + TAG_LEN {
        return Err(Error::InvalidLength(cryptogram.len()));
    }
    let (salt, rest) = cryptogram.split_at(SALT_LEN);
    let (c, t) = rest.split_at(rest.len() - TAG_LEN);
    let (ke, ka) = expand_keys(salt, pw);

    let mut msg = kmac_xof256(&ke, b"", c.len() * 8, b"SKE");
    for (m_byte, c_byte) in msg.iter_mut().zip(c) {
        *m_byte ^= *c_byte;
    }
    let t_p = Zeroizing::new(kmac_xof256(&ka, &msg, 512, b"SKA"));
    if bool::from(t.ct_eq(&t_p)) {
        Ok(msg)
    } else {
        Err(Error::TagMismatch)
    }
}

fn expand_keys(salt: &[u8], pw: &[u8]) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let mut seed = Zeroizing::new(Vec::with_capacity(salt.len() + pw.len()));
    seed.extend_from_slice(salt);
    seed.extend_from_slice(pw);
    let keys = Zeroizing::new(kmac_xof256(&seed, b"", 1024, b"S"));
    let ke = Zeroizing::new(keys[..64].to_vec());
    let ka = Zeroizing::new(keys[64..].to_vec());
    (ke, ka)
}

use thiserror::Error;

/// Failures surfaced by decryption and point decoding.
///
/// Decryption never returns plaintext alongside an error; a cryptogram that
/// fails authentication yields [`Error::TagMismatch`] and nothing else.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The input is too short to contain the scheme's framing.
    #[error("input of {0} bytes is too short for a well-formed cryptogram")]
    InvalidLength(usize),

    /// The authentication tag did not match: the cryptogram was tampered
    /// with or the passphrase is wrong.
    #[error("authentication tag mismatch")]
    TagMismatch,

    /// The field element has no square root.
    #[error("field element is not a quadratic residue")]
    RootNotFound,

    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    InvalidPoint,
}

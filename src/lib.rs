//! A sponge-based cryptographic toolkit: the Keccak-p\[1600\] permutation,
//! the SHAKE256/cSHAKE256/KMACXOF256 extendable-output functions of NIST
//! FIPS 202 and SP 800-185, and two authenticated encryption schemes built
//! on KMACXOF256 — a passphrase-keyed symmetric scheme and an ECIES-style
//! public-key scheme over the Ed448-Goldilocks curve.
//!
//! The layers, leaves first:
//!
//! 1. [`keccak`]: the Keccak-p\[1600\] permutation family.
//! 2. [`sponge`]: the sponge construction at a 512-bit capacity.
//! 3. [`sp800_185`] and [`xof`]: string framing and the domain-separated
//!    XOFs.
//! 4. [`pw`]: hashing, MACs, and symmetric authenticated encryption under a
//!    passphrase.
//! 5. [`ed448`] and [`ecies`]: Edwards-curve arithmetic and public-key
//!    authenticated encryption.
//!
//! # Security
//!
//! Only the authentication-tag comparisons are constant-time. The curve
//! arithmetic uses arbitrary-precision integers and a branching scalar
//! ladder, both of which leak timing; do not expose this crate to
//! adversaries who can measure it. Sponge states and derived symmetric keys
//! are zeroized on drop.

pub mod ecies;
pub mod ed448;
mod error;
pub mod keccak;
pub mod pw;
pub mod sp800_185;
pub mod sponge;
pub mod xof;

mod fuzzing;

pub use error::Error;

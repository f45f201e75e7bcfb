//! The sponge construction over Keccak-f\[1600\] with a 512-bit capacity.
//!
//! [`Sponge`] XORs input into the 1088-bit rate portion of the state,
//! permuting whenever a full rate block has been absorbed. [`Sponge::finish`]
//! applies the pad10*1 padding together with a caller-supplied domain
//! separation byte and hands the state over to a [`Squeeze`], which reads
//! rate-sized blocks back out. The fused padding bytes (0x9F for SHAKE256,
//! 0x84 for cSHAKE256) fall out of XORing the domain byte and 0x80 into the
//! same rate byte when the input ends one byte short of the rate boundary.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::keccak::KeccakF1600;

/// The rate in bytes: (1600 − 512) / 8.
pub const RATE: usize = 136;

/// The absorbing half of a sponge.
#[derive(Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    state: KeccakF1600,
    pos: usize,
}

impl Sponge {
    /// Returns a sponge with an all-zero state.
    pub fn new() -> Sponge {
        Sponge::default()
    }

    /// Absorb the given slice. Absorbing a concatenation in pieces is
    /// equivalent to absorbing it in one call.
    pub fn absorb(&mut self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            let take = (RATE - self.pos).min(bytes.len());
            let (head, rest) = bytes.split_at(take);
            for (st_byte, byte) in self.state.as_mut()[self.pos..self.pos + take]
                .iter_mut()
                .zip(head)
            {
                *st_byte ^= *byte;
            }
            self.pos += take;
            if self.pos == RATE {
                self.state.permute();
                self.pos = 0;
            }
            bytes = rest;
        }
    }

    /// Apply the domain separation byte and pad10*1, then switch to
    /// squeezing.
    pub fn finish(mut self, ds: u8) -> Squeeze {
        let state = self.state.as_mut();
        state[self.pos] ^= ds;
        state[RATE - 1] ^= 0x80;
        self.state.permute();
        Squeeze { state: self.state.clone(), pos: 0 }
    }
}

/// The squeezing half of a sponge, returned by [`Sponge::finish`].
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Squeeze {
    state: KeccakF1600,
    pos: usize,
}

impl Squeeze {
    /// Fill the given mutable slice with squeezed data.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        let mut filled = 0;
        while filled < out.len() {
            if self.pos == RATE {
                self.state.permute();
                self.pos = 0;
            }
            let take = (RATE - self.pos).min(out.len() - filled);
            out[filled..filled + take]
                .copy_from_slice(&self.state.as_ref()[self.pos..self.pos + take]);
            self.pos += take;
            filled += take;
        }
    }

    /// Return `n` bytes of squeezed data.
    pub fn squeeze_vec(&mut self, n: usize) -> Vec<u8> {
        let mut b = vec![0u8; n];
        self.squeeze(&mut b);
        b
    }
}

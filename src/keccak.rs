//! The Keccak-p\[1600\] permutation family.
//!
//! [`KeccakF1600`] is the full 24-round Keccak-f\[1600\] permutation from the
//! SHA-3 standard; [`KeccakP1600`] is the reduced-round generalization. A
//! permutation of `R` rounds applies the last `R` of the 24 standard round
//! constants, so `KeccakP1600<24>` is Keccak-f\[1600\] and `KeccakP1600<12>`
//! is the KangarooTwelve permutation.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

/// The full Keccak-f\[1600\] permutation with 24 rounds.
pub type KeccakF1600 = KeccakP1600<24>;

/// The generic Keccak-p\[1600\] permutation, parameterized with 0≤R≤24
/// rounds over a 200-byte state of 25 little-endian 64-bit lanes.
#[derive(Clone, Debug)]
#[repr(align(8))]
pub struct KeccakP1600<const R: usize>([u8; 200]);

impl<const R: usize> Default for KeccakP1600<R> {
    fn default() -> Self {
        KeccakP1600([0u8; 200])
    }
}

impl<const R: usize> AsRef<[u8; 200]> for KeccakP1600<R> {
    fn as_ref(&self) -> &[u8; 200] {
        &self.0
    }
}

impl<const R: usize> AsMut<[u8; 200]> for KeccakP1600<R> {
    fn as_mut(&mut self) -> &mut [u8; 200] {
        &mut self.0
    }
}

impl<const R: usize> Zeroize for KeccakP1600<R> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<const R: usize> KeccakP1600<R> {
    /// Permute the state.
    #[inline(always)]
    pub fn permute(&mut self) {
        let mut lanes = [0u64; 25];
        LittleEndian::read_u64_into(&self.0, &mut lanes);
        keccak_p::<R>(&mut lanes);
        LittleEndian::write_u64_into(&lanes, &mut self.0);
    }
}

const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

// Rotation offsets ((t+1)*(t+2)/2 mod 64) walked along the π lane order.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

fn keccak_p<const R: usize>(lanes: &mut [u64; 25]) {
    debug_assert!(R <= 24);

    for round in (24 - R)..24 {
        // θ
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in (0..25).step_by(5) {
                lanes[x + y] ^= d;
            }
        }

        // ρ and π, combined; lane 0 passes through unchanged
        let mut t = lanes[1];
        for i in 0..24 {
            let next = lanes[PI[i]];
            lanes[PI[i]] = t.rotate_left(RHO[i]);
            t = next;
        }

        // χ
        for y in (0..25).step_by(5) {
            let row = [lanes[y], lanes[y + 1], lanes[y + 2], lanes[y + 3], lanes[y + 4]];
            for x in 0..5 {
                lanes[y + x] = row[x] ^ ((!row[(x + 1) % 5]) & row[(x + 2) % 5]);
            }
        }

        // ι
        lanes[0] ^= RC[round];
    }
}

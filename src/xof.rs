//! SHAKE256 and the SP 800-185 extendable-output functions cSHAKE256 and
//! KMACXOF256, all at a 512-bit capacity.
//!
//! Output lengths are bit counts and must be whole bytes; that contract is
//! asserted rather than surfaced as an error.

use crate::sp800_185::{bytepad, encode_string, right_encode};
use crate::sponge::{Sponge, RATE};

/// SHAKE256 domain separator; fuses with the leading pad10*1 bit into 0x9F
/// at the rate boundary.
const SHAKE_DS: u8 = 0x1f;

/// cSHAKE256 domain separator.
const CSHAKE_DS: u8 = 0x04;

/// SHAKE256 of `input`, producing `bits / 8` bytes.
pub fn shake256(input: &[u8], bits: usize) -> Vec<u8> {
    assert_eq!(bits % 8, 0, "output length must be a whole number of bytes");
    let mut sponge = Sponge::new();
    sponge.absorb(input);
    sponge.finish(SHAKE_DS).squeeze_vec(bits / 8)
}

/// cSHAKE256 of `input` under a function `name` and a customization string
/// `custom`. Falls through to [`shake256`] when both strings are empty.
pub fn cshake256(input: &[u8], bits: usize, name: &[u8], custom: &[u8]) -> Vec<u8> {
    if name.is_empty() && custom.is_empty() {
        return shake256(input, bits);
    }
    assert_eq!(bits % 8, 0, "output length must be a whole number of bytes");
    let mut sponge = framed_sponge(name, custom);
    sponge.absorb(input);
    sponge.finish(CSHAKE_DS).squeeze_vec(bits / 8)
}

/// KMACXOF256 of `msg` under `key` and a customization string `custom`,
/// producing `bits / 8` bytes.
///
/// The absorbed payload is `bytepad(encode_string(key), 136) ‖ msg ‖
/// right_encode(0)` under the cSHAKE function name `"KMAC"`; the trailing
/// `right_encode(0)` selects the arbitrary-length XOF variant.
pub fn kmac_xof256(key: &[u8], msg: &[u8], bits: usize, custom: &[u8]) -> Vec<u8> {
    assert_eq!(bits % 8, 0, "output length must be a whole number of bytes");
    let mut sponge = framed_sponge(b"KMAC", custom);
    sponge.absorb(&bytepad(&encode_string(key), RATE));
    sponge.absorb(msg);
    sponge.absorb(&right_encode(0));
    sponge.finish(CSHAKE_DS).squeeze_vec(bits / 8)
}

// A sponge that has absorbed the cSHAKE prefix
// bytepad(encode_string(name) ‖ encode_string(custom), 136).
fn framed_sponge(name: &[u8], custom: &[u8]) -> Sponge {
    let mut prefix = encode_string(name);
    prefix.extend_from_slice(&encode_string(custom));
    let mut sponge = Sponge::new();
    sponge.absorb(&bytepad(&prefix, RATE));
    sponge
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake256_empty_512() {
        assert_eq!(
            shake256(b"", 512),
            hex::decode(
                "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f\
                 d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
            )
            .unwrap()
        );
    }

    #[test]
    fn shake256_empty_256_is_a_prefix() {
        let long = shake256(b"", 512);
        assert_eq!(shake256(b"", 256), long[..32]);
    }

    #[test]
    fn shake256_multi_block() {
        // two full rate blocks plus a partial one
        let input = vec![0x5a; 300];
        let out = shake256(&input, 1088 * 2);
        assert_eq!(out.len(), 272);
        assert_eq!(shake256(&input, 8), out[..1]);
    }

    #[test]
    fn cshake256_nist_sample_3() {
        // NIST SP 800-185 cSHAKE256 sample #3
        let out = cshake256(&[0x00, 0x01, 0x02, 0x03], 512, b"", b"Email Signature");
        assert_eq!(
            out,
            hex::decode(
                "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd1\
                 64020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c",
            )
            .unwrap()
        );
    }

    #[test]
    fn cshake256_empty_strings_fall_through_to_shake() {
        let input = b"fall through";
        assert_eq!(cshake256(input, 256, b"", b""), shake256(input, 256));
        assert_ne!(cshake256(input, 256, b"", b"c"), shake256(input, 256));
    }

    #[test]
    fn kmac_xof256_nist_sample_4() {
        // NIST SP 800-185 KMACXOF256 sample #4
        let key = (0x40u8..0x60).collect::<Vec<u8>>();
        let out = kmac_xof256(&key, &[0x00, 0x01, 0x02, 0x03], 512, b"My Tagged Application");
        assert_eq!(
            out,
            hex::decode(
                "1755133f1534752aad0748f2c706fb5c784512cab835cd15676b16c0c6647fa9\
                 6faa7af634a0bf8ff6df39374fa00fad9a39e322a7c92065a64eb1fb0801eb2b",
            )
            .unwrap()
        );
    }

    #[test]
    fn kmac_xof256_separates_domains() {
        let a = kmac_xof256(b"key", b"msg", 256, b"S");
        let b = kmac_xof256(b"key", b"msg", 256, b"T");
        assert_ne!(a, b);
        assert_ne!(kmac_xof256(b"key", b"msg", 256, b""), a);
        assert_ne!(kmac_xof256(b"yek", b"msg", 256, b"S"), a);
    }

    #[test]
    fn kmac_xof256_output_length_is_not_a_prefix_parameter() {
        // the XOF variant encodes zero for the length, so longer requests
        // extend shorter ones
        let short = kmac_xof256(b"key", b"msg", 256, b"S");
        let long = kmac_xof256(b"key", b"msg", 512, b"S");
        assert_eq!(short, long[..32]);
    }
}

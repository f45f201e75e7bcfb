#![cfg(test)]

use num_bigint::BigUint;
use proptest::collection::vec;
use proptest::prelude::*;

use crate::ed448::Point;
use crate::xof::kmac_xof256;
use crate::{ecies, pw, Error};

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..200)
}

proptest! {
    #[test]
    fn pw_round_trip(msg in arb_data(), pw in arb_data()) {
        let cryptogram = pw::encrypt(&msg, &pw);
        prop_assert_eq!(cryptogram.len(), msg.len() + pw::SALT_LEN + pw::TAG_LEN);
        prop_assert_eq!(pw::decrypt(&cryptogram, &pw), Ok(msg));
    }

    #[test]
    fn pw_single_bit_flip_is_detected(
        msg in vec(any::<u8>(), 1..100),
        pw in arb_data(),
        offset in any::<usize>(),
        bit in 0u8..8,
    ) {
        let mut cryptogram = pw::encrypt(&msg, &pw);
        // flip within the ciphertext-or-tag region
        let pos = pw::SALT_LEN + offset % (cryptogram.len() - pw::SALT_LEN);
        cryptogram[pos] ^= 1 << bit;
        prop_assert_eq!(pw::decrypt(&cryptogram, &pw), Err(Error::TagMismatch));
    }

    #[test]
    fn kmac_xof256_is_deterministic(
        key in arb_data(),
        msg in arb_data(),
        custom in vec(any::<u8>(), 0..32),
    ) {
        let a = kmac_xof256(&key, &msg, 512, &custom);
        let b = kmac_xof256(&key, &msg, 512, &custom);
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn scalar_mul_is_linear(s in any::<u64>(), t in any::<u64>()) {
        let g = Point::generator();
        let sum = BigUint::from(s) + BigUint::from(t);
        let lhs = g.scalar_mul(&BigUint::from(s)).add(&g.scalar_mul(&BigUint::from(t)));
        prop_assert_eq!(lhs, g.scalar_mul(&sum));
    }

    #[test]
    fn ecies_round_trip(msg in arb_data()) {
        let kp = ecies::KeyPair::from_passphrase(b"fuzz");
        let cryptogram = ecies::encrypt(kp.public(), &msg);
        prop_assert_eq!(cryptogram.len(), msg.len() + ecies::OVERHEAD);
        prop_assert_eq!(ecies::decrypt(&cryptogram, b"fuzz"), Ok(msg));
    }
}

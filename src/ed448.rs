//! Arithmetic on Ed448-Goldilocks: the Edwards curve
//! `x² + y² = 1 + d·x²·y² (mod p)` with `p = 2^448 − 2^224 − 1` and
//! `d = −39081`.
//!
//! Points are affine pairs of arbitrary-precision field elements. The
//! addition law is complete, so doubling is self-addition and no input is
//! exceptional. Scalar multiplication is a plain left-to-right
//! double-and-add starting from the identity `(0, 1)`, which makes scalars
//! 0 and 1 ordinary inputs. None of this is constant-time; see the crate
//! documentation.
//!
//! Coordinates serialize as canonical fixed-width 57-byte little-endian
//! strings, the conventional Ed448 coordinate length.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::Error;

/// The length in bytes of one serialized coordinate.
pub const COORD_LEN: usize = 57;

/// The field prime 2^448 − 2^224 − 1.
static P: Lazy<BigUint> =
    Lazy::new(|| (BigUint::one() << 448) - (BigUint::one() << 224) - BigUint::one());

/// The Edwards coefficient −39081 mod p.
static D: Lazy<BigUint> = Lazy::new(|| &*P - 39081u32);

/// The order of the subgroup generated by [`Point::generator`]:
/// 2^446 − 13818066809895115352007386748515426880336692474882178609894547503885.
static ORDER: Lazy<BigUint> = Lazy::new(|| {
    (BigUint::one() << 446)
        - BigUint::parse_bytes(
            b"13818066809895115352007386748515426880336692474882178609894547503885",
            10,
        )
        .expect("order constant parses")
});

static GENERATOR: Lazy<Point> = Lazy::new(|| Point {
    x: BigUint::from(8u32),
    y: BigUint::parse_bytes(
        b"5634002009290881526136096293786413854101026821172585664047502140220\
          5968692958331958504085028232273124150593083599738261331968940028625\
          8",
        10,
    )
    .expect("generator constant parses"),
});

/// The order of the subgroup generated by the generator point.
pub fn order() -> &'static BigUint {
    &ORDER
}

/// An affine point on the curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Point {
    x: BigUint,
    y: BigUint,
}

impl Point {
    /// The neutral element (0, 1).
    pub fn identity() -> Point {
        Point { x: BigUint::zero(), y: BigUint::one() }
    }

    /// The fixed generator (8, y_G).
    pub fn generator() -> Point {
        GENERATOR.clone()
    }

    /// The x coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The y coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Whether the coordinates satisfy the curve equation.
    pub fn is_on_curve(&self) -> bool {
        let x2 = fe_mul(&self.x, &self.x);
        let y2 = fe_mul(&self.y, &self.y);
        fe_add(&x2, &y2) == fe_add(&BigUint::one(), &fe_mul(&D, &fe_mul(&x2, &y2)))
    }

    /// Add two points with the complete Edwards formulas:
    ///
    /// ```text
    /// x₃ = (x₁y₂ + y₁x₂) / (1 + d·x₁x₂y₁y₂)
    /// y₃ = (y₁y₂ − x₁x₂) / (1 − d·x₁x₂y₁y₂)
    /// ```
    pub fn add(&self, other: &Point) -> Point {
        let xx = fe_mul(&self.x, &other.x);
        let yy = fe_mul(&self.y, &other.y);
        let xy = fe_mul(&self.x, &other.y);
        let yx = fe_mul(&self.y, &other.x);
        let dxxyy = fe_mul(&D, &fe_mul(&xx, &yy));
        let x3 = fe_mul(
            &fe_add(&xy, &yx),
            &fe_invert(&fe_add(&BigUint::one(), &dxxyy)),
        );
        let y3 = fe_mul(
            &fe_sub(&yy, &xx),
            &fe_invert(&fe_sub(&BigUint::one(), &dxxyy)),
        );
        Point { x: x3, y: y3 }
    }

    /// Double the point.
    pub fn double(&self) -> Point {
        self.add(self)
    }

    /// The inverse point (−x, y).
    pub fn negate(&self) -> Point {
        Point { x: fe_sub(&BigUint::zero(), &self.x), y: self.y.clone() }
    }

    /// Multiply by a scalar with double-and-add, accumulating from the
    /// identity.
    pub fn scalar_mul(&self, k: &BigUint) -> Point {
        let mut acc = Point::identity();
        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Recover a point from its y coordinate and the least-significant bit
    /// of x. Fails with [`Error::RootNotFound`] if no such point exists.
    pub fn from_y(y: &BigUint, x_lsb: bool) -> Result<Point, Error> {
        let y = y % &*P;
        let y2 = fe_mul(&y, &y);
        let num = fe_sub(&BigUint::one(), &y2);
        let den = fe_sub(&BigUint::one(), &fe_mul(&D, &y2));
        let x = sqrt(&fe_mul(&num, &fe_invert(&den)), x_lsb)?;
        Ok(Point { x, y })
    }

    /// The canonical 57-byte little-endian encoding of the x coordinate.
    pub fn x_bytes(&self) -> [u8; COORD_LEN] {
        fe_bytes(&self.x)
    }

    /// The canonical 57-byte little-endian encoding of the y coordinate.
    pub fn y_bytes(&self) -> [u8; COORD_LEN] {
        fe_bytes(&self.y)
    }

    /// The compressed 57-byte encoding: y in little-endian form with the
    /// least-significant bit of x stored in the top bit of the final byte.
    pub fn to_compressed_bytes(&self) -> [u8; COORD_LEN] {
        let mut out = fe_bytes(&self.y);
        if self.x.bit(0) {
            out[COORD_LEN - 1] |= 0x80;
        }
        out
    }

    /// Decompress a point encoded by [`Point::to_compressed_bytes`].
    pub fn from_compressed_bytes(bytes: &[u8]) -> Result<Point, Error> {
        if bytes.len() != COORD_LEN {
            return Err(Error::InvalidLength(bytes.len()));
        }
        let x_lsb = bytes[COORD_LEN - 1] & 0x80 != 0;
        let mut y_bytes = [0u8; COORD_LEN];
        y_bytes.copy_from_slice(bytes);
        y_bytes[COORD_LEN - 1] &= 0x7f;
        let y = BigUint::from_bytes_le(&y_bytes);
        if y >= *P {
            return Err(Error::InvalidPoint);
        }
        Point::from_y(&y, x_lsb)
    }

    /// Serialize as `x ‖ y`, 114 bytes.
    pub fn to_bytes(&self) -> [u8; 2 * COORD_LEN] {
        let mut out = [0u8; 2 * COORD_LEN];
        out[..COORD_LEN].copy_from_slice(&self.x_bytes());
        out[COORD_LEN..].copy_from_slice(&self.y_bytes());
        out
    }

    /// Deserialize from the 114-byte `x ‖ y` encoding, rejecting
    /// non-canonical coordinates and points off the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Point, Error> {
        if bytes.len() != 2 * COORD_LEN {
            return Err(Error::InvalidLength(bytes.len()));
        }
        let x = BigUint::from_bytes_le(&bytes[..COORD_LEN]);
        let y = BigUint::from_bytes_le(&bytes[COORD_LEN..]);
        if x >= *P || y >= *P {
            return Err(Error::InvalidPoint);
        }
        let point = Point { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }
}

/// Square root mod p, available since p ≡ 3 (mod 4): `v^((p+1)/4)`,
/// negated if needed to match the requested least-significant bit, and
/// verified by squaring. Fails with [`Error::RootNotFound`] for
/// non-residues.
pub fn sqrt(v: &BigUint, lsb: bool) -> Result<BigUint, Error> {
    let v = v % &*P;
    let mut root = v.modpow(&((&*P + BigUint::one()) >> 2), &P);
    if root.bit(0) != lsb && !root.is_zero() {
        root = &*P - root;
    }
    if fe_mul(&root, &root) == v {
        Ok(root)
    } else {
        Err(Error::RootNotFound)
    }
}

// Field helpers; operands are reduced mod p.

fn fe_add(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % &*P
}

fn fe_sub(a: &BigUint, b: &BigUint) -> BigUint {
    ((a + &*P) - b) % &*P
}

fn fe_mul(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % &*P
}

// Inversion via Fermat: a^(p−2) mod p.
fn fe_invert(a: &BigUint) -> BigUint {
    a.modpow(&(&*P - 2u32), &P)
}

fn fe_bytes(v: &BigUint) -> [u8; COORD_LEN] {
    let mut out = [0u8; COORD_LEN];
    let le = v.to_bytes_le();
    out[..le.len()].copy_from_slice(&le);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_satisfies_curve_equation() {
        assert!(Point::generator().is_on_curve());
        assert!(Point::identity().is_on_curve());
    }

    #[test]
    fn identity_is_neutral() {
        let g = Point::generator();
        assert_eq!(g.add(&Point::identity()), g);
        assert_eq!(Point::identity().add(&g), g);
    }

    #[test]
    fn small_scalars() {
        let g = Point::generator();
        assert_eq!(g.scalar_mul(&BigUint::zero()), Point::identity());
        assert_eq!(g.scalar_mul(&BigUint::one()), g);
        assert_eq!(g.scalar_mul(&BigUint::from(2u32)), g.add(&g));
        assert_eq!(g.scalar_mul(&BigUint::from(2u32)), g.double());
    }

    #[test]
    fn scalar_mul_distributes_over_addition() {
        let g = Point::generator();
        let lhs = g.scalar_mul(&BigUint::from(5u32)).add(&g.scalar_mul(&BigUint::from(7u32)));
        assert_eq!(lhs, g.scalar_mul(&BigUint::from(12u32)));
        assert!(lhs.is_on_curve());
    }

    #[test]
    fn negation_cancels() {
        let g = Point::generator();
        assert_eq!(g.add(&g.negate()), Point::identity());
    }

    #[test]
    fn generator_has_the_stated_order() {
        assert_eq!(Point::generator().scalar_mul(order()), Point::identity());
    }

    #[test]
    fn scalars_reduce_mod_the_order() {
        let g = Point::generator();
        assert_eq!(g.scalar_mul(&(order() + BigUint::one())), g);
    }

    #[test]
    fn decompression_recovers_the_generator() {
        let g = Point::generator();
        // x = 8, so the low bit of x is 0
        assert_eq!(Point::from_y(g.y(), false), Ok(g.clone()));
        assert_eq!(Point::from_y(g.y(), true), Ok(g.negate()));
    }

    #[test]
    fn sqrt_rejects_non_residues() {
        // p ≡ 3 (mod 4), so −1 is not a quadratic residue
        let minus_one = &*P - BigUint::one();
        assert_eq!(sqrt(&minus_one, false), Err(Error::RootNotFound));
    }

    #[test]
    fn sqrt_selects_the_requested_root() {
        let four = BigUint::from(4u32);
        assert_eq!(sqrt(&four, false), Ok(BigUint::from(2u32)));
        assert_eq!(sqrt(&four, true), Ok(&*P - 2u32));
    }

    #[test]
    fn byte_round_trip() {
        let g = Point::generator();
        let p = g.scalar_mul(&BigUint::from(0xdeadbeefu32));
        assert_eq!(Point::from_bytes(&p.to_bytes()), Ok(p));
    }

    #[test]
    fn compressed_round_trip() {
        let g = Point::generator();
        let p = g.scalar_mul(&BigUint::from(99u32));
        assert_eq!(Point::from_compressed_bytes(&g.to_compressed_bytes()), Ok(g));
        assert_eq!(Point::from_compressed_bytes(&p.to_compressed_bytes()), Ok(p));
    }

    #[test]
    fn decompression_rejects_bad_input() {
        assert_eq!(Point::from_compressed_bytes(&[0u8; 3]), Err(Error::InvalidLength(3)));
        // y = 2 has no corresponding x on the curve
        let mut bytes = [0u8; COORD_LEN];
        bytes[0] = 2;
        assert_eq!(Point::from_compressed_bytes(&bytes), Err(Error::RootNotFound));
    }

    #[test]
    fn from_bytes_rejects_bad_input() {
        assert_eq!(Point::from_bytes(&[0u8; 3]), Err(Error::InvalidLength(3)));
        // (0, 0) is not on the curve
        assert_eq!(Point::from_bytes(&[0u8; 114]), Err(Error::InvalidPoint));
        // non-canonical coordinate: x = p
        let mut bytes = Point::identity().to_bytes();
        bytes[..COORD_LEN].copy_from_slice(&fe_bytes(&P));
        assert_eq!(Point::from_bytes(&bytes), Err(Error::InvalidPoint));
    }
}

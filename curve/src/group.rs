use ark_ff::{BigInt, PrimeField};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;

use crate::fields::Fr;

/// Read access to the bits of a non-negative scalar.
pub trait ScalarBits {
    /// Little-endian 64-bit limbs.
    fn to_u64_limbs(&self) -> Vec<u64>;

    /// Position of the highest set bit plus one; zero for the zero scalar.
    fn num_bits(&self) -> usize {
        bit_length(&self.to_u64_limbs())
    }
}

impl<const N: usize> ScalarBits for BigInt<N> {
    #[inline]
    fn to_u64_limbs(&self) -> Vec<u64> {
        self.0.to_vec()
    }
}

impl ScalarBits for Fr {
    #[inline]
    fn to_u64_limbs(&self) -> Vec<u64> {
        self.into_bigint().0.to_vec()
    }
}

impl ScalarBits for u64 {
    #[inline]
    fn to_u64_limbs(&self) -> Vec<u64> {
        vec![*self]
    }
}

impl ScalarBits for BigUint {
    #[inline]
    fn to_u64_limbs(&self) -> Vec<u64> {
        self.to_u64_digits()
    }
}

#[inline]
pub(crate) fn bit_length(limbs: &[u64]) -> usize {
    limbs
        .iter()
        .rposition(|&limb| limb != 0)
        .map_or(0, |i| 64 * i + (64 - limbs[i].leading_zeros() as usize))
}

#[inline]
pub(crate) fn test_bit(limbs: &[u64], i: usize) -> bool {
    limbs
        .get(i / 64)
        .is_some_and(|limb| (limb >> (i % 64)) & 1 == 1)
}

/// Additive group interface shared by G1 and G2.
///
/// Scalar multiplication routines are written against this trait only, so
/// they apply to any type with a group law.
pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// wNAF window thresholds, indexed from the smallest window upward.
    fn wnaf_window_table() -> &'static [usize];

    /// Fixed-base window thresholds in number of scalars, indexed from
    /// window 1 upward.
    fn fixed_base_exp_window_table() -> &'static [usize];

    /// Plain double-and-add, least significant bit first.
    #[inline]
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let mut result = Self::identity();
        let mut temp = *self;

        for limb in scalar.to_u64_limbs() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result += temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }

        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result += temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }
}

//! Field layer of alt_bn128.
//!
//! The prime field `Fq`, its quadratic extension `Fq2 = Fq[u]/(u^2 + 1)` and
//! the scalar field `Fr` come from `ark-bn254`. This module only adds the
//! twist-specific constants the group law needs, derived once from the field
//! characteristic.

use ark_ff::{Field, MontFp, PrimeField};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

pub use ark_bn254::{Fq, Fq2, Fr};

/// The sextic twist element xi = 9 + u.
pub const TWIST: Fq2 = Fq2::new(MontFp!("9"), MontFp!("1"));

/// Coefficient applied to `X` by the Frobenius endomorphism on the twist:
/// xi^((q - 1) / 3).
pub static TWIST_MUL_BY_Q_X: Lazy<Fq2> = Lazy::new(|| TWIST.pow(characteristic_minus_one_over(3)));

/// Coefficient applied to `Y` by the Frobenius endomorphism on the twist:
/// xi^((q - 1) / 2).
pub static TWIST_MUL_BY_Q_Y: Lazy<Fq2> = Lazy::new(|| TWIST.pow(characteristic_minus_one_over(2)));

/// Characteristic of the base field as a fixed-width integer.
#[inline]
pub fn base_field_char() -> <Fq as PrimeField>::BigInt {
    Fq::MODULUS
}

/// Order of both groups, i.e. the characteristic of `Fr`.
#[inline]
pub fn scalar_field_char() -> <Fr as PrimeField>::BigInt {
    Fr::MODULUS
}

/// (q - 1) / d as little-endian limbs, suitable for `Field::pow`.
fn characteristic_minus_one_over(d: u32) -> Vec<u64> {
    let q = BigUint::from(Fq::MODULUS);
    ((q - 1u32) / d).to_u64_digits()
}

use ark_ff::PrimeField;
use rand::{Rng, RngCore};

use crate::fields::{Fq, Fq2, Fr};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// Reduce 512 uniform bits, so the bias is below 2^-250.
#[inline]
fn sample_mod_order<F: PrimeField, R: Rng + ?Sized>(rng: &mut R) -> F {
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    F::from_le_bytes_mod_order(&bytes)
}

impl RandomField for Fr {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        sample_mod_order(rng)
    }
}

impl RandomField for Fq {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        sample_mod_order(rng)
    }
}

impl RandomField for Fq2 {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Fq2::new(Fq::random(rng), Fq::random(rng))
    }
}

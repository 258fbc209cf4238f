//! Operations that only exist on the twist group.

use ark_ff::Field;

use crate::fields::{Fq2, TWIST_MUL_BY_Q_X, TWIST_MUL_BY_Q_Y};
use crate::jacobian::G2;
use crate::params::{CurveParams, G2Params};

impl G2 {
    /// Multiply a twist-field element by the twisted coefficient `b' = 3 / xi`.
    #[inline]
    pub fn mul_by_b(elt: &Fq2) -> Fq2 {
        G2Params::mul_by_b(elt)
    }

    /// The untwist-Frobenius-twist endomorphism.
    ///
    /// Raises each coordinate to the `q`-th power and corrects by the twist
    /// constants. On the order-`r` subgroup this agrees with multiplication
    /// by `q`.
    pub fn mul_by_q(&self) -> Self {
        let mut x = self.x;
        let mut y = self.y;
        let mut z = self.z;
        x.frobenius_map_in_place(1);
        y.frobenius_map_in_place(1);
        z.frobenius_map_in_place(1);

        G2::new(*TWIST_MUL_BY_Q_X * x, *TWIST_MUL_BY_Q_Y * y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{base_field_char, Fq, TWIST};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mul_by_q_matches_scalar_multiplication() {
        let mut rng = StdRng::seed_from_u64(42);
        let q = base_field_char();
        for _ in 0..4 {
            let p = G2::random_element(&mut rng);
            let endo = p.mul_by_q();
            assert!(endo.is_well_formed());
            assert_eq!(endo, p.mul_scalar(&q));
        }
        assert!(G2::zero().mul_by_q().is_zero());
    }

    #[test]
    fn test_mul_by_b_undoes_twist() {
        let elt = Fq2::new(Fq::from(5u64), Fq::from(6u64));
        assert_eq!(G2::mul_by_b(&elt) * TWIST, elt * Fq2::from(3u64));
    }
}

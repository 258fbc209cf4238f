use ark_ff::{AdditiveGroup, BigInt, Field, PrimeField};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand::Rng;

use crate::errors::CurveError;
use crate::fields::{Fq, Fr};
use crate::group::{Group, ScalarBits};
use crate::params::{CurveParams, G1Params, G2Params};
use crate::random::RandomField;
use crate::wnaf::opt_window_wnaf_exp;

/// Point on `y^2 = x^3 + b` in Jacobian coordinates.
///
/// `(X, Y, Z)` stands for the affine point `(X / Z^2, Y / Z^3)`. Any point
/// with `Z = 0` is the identity; the canonical identity is `(0, 1, 0)`.
/// Construction does not check the curve equation, see
/// [`Jacobian::is_well_formed`].
#[derive(Copy, Clone, Debug)]
pub struct Jacobian<P: CurveParams> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    _params: PhantomData<P>,
}

/// The base group over `Fq`.
pub type G1 = Jacobian<G1Params>;

/// The twist group over `Fq2`.
pub type G2 = Jacobian<G2Params>;

impl<P: CurveParams> Jacobian<P> {
    #[inline]
    pub const fn new(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Jacobian {
            x,
            y,
            z,
            _params: PhantomData,
        }
    }

    /// The point at infinity (0, 1, 0).
    #[inline]
    pub fn zero() -> Self {
        Self::new(P::BaseField::ZERO, P::BaseField::ONE, P::BaseField::ZERO)
    }

    /// The fixed generator, in special form.
    #[inline]
    pub fn one() -> Self {
        Self::new(P::GENERATOR_X, P::GENERATOR_Y, P::BaseField::ONE)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.z == P::BaseField::ZERO
    }

    #[inline]
    pub fn x(&self) -> &P::BaseField {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &P::BaseField {
        &self.y
    }

    #[inline]
    pub fn z(&self) -> &P::BaseField {
        &self.z
    }

    /// Coordinate `0`, `1` or `2`, in `X, Y, Z` order.
    pub fn coord(&self, index: usize) -> Result<&P::BaseField, CurveError> {
        match index {
            0 => Ok(&self.x),
            1 => Ok(&self.y),
            2 => Ok(&self.z),
            _ => Err(CurveError::InvalidCoordinateIndex(index)),
        }
    }

    pub fn coord_mut(&mut self, index: usize) -> Result<&mut P::BaseField, CurveError> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(CurveError::InvalidCoordinateIndex(index)),
        }
    }

    /// Rescale so that `Z = 1`, with a single inversion. The identity is
    /// reset to `(0, 1, 0)`.
    pub fn to_affine_coordinates(&mut self) {
        if self.is_zero() {
            *self = Self::zero();
            return;
        }

        // NOTE Z is non-zero here
        let z_inv = self.z.inverse().expect("non-identity point has invertible Z");
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;
        self.x *= z_inv2;
        self.y *= z_inv3;
        self.z = P::BaseField::ONE;
    }

    #[inline]
    pub fn to_special(&mut self) {
        self.to_affine_coordinates();
    }

    #[inline]
    pub fn is_special(&self) -> bool {
        self.is_zero() || self.z == P::BaseField::ONE
    }

    /// Doubling, dbl-2009-l for `a = 0`.
    pub fn dbl(self) -> Self {
        if self.is_zero() {
            return self;
        }

        #[cfg(feature = "profile-op-counts")]
        P::op_counters().record_dbl();

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        // D = 2 * ((X + B)^2 - A - C)
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let mut eight_c = c.double();
        eight_c.double_in_place().double_in_place();
        let y3 = e * (d - x3) - eight_c;
        let z3 = (self.y * self.z).double();

        Self::new(x3, y3, z3)
    }

    /// General addition, add-2007-bl.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: &Self) -> Self {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        if u1 == u2 {
            // Same x: either the same point or its negation.
            return if s1 == s2 { self.dbl() } else { Self::zero() };
        }

        #[cfg(feature = "profile-op-counts")]
        P::op_counters().record_add();

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;

        Self::new(x3, y3, z3)
    }

    /// Addition of a point in special form, madd-2007-bl.
    ///
    /// `other` must satisfy [`Jacobian::is_special`]; debug builds assert it.
    pub fn mixed_add(self, other: &Self) -> Self {
        debug_assert!(
            other.is_special(),
            "mixed_add requires an operand with Z = 1"
        );

        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return self;
        }

        let z1z1 = self.z.square();
        let u2 = other.x * z1z1;
        let s2 = other.y * self.z * z1z1;

        if self.x == u2 {
            return if self.y == s2 {
                self.dbl()
            } else {
                Self::zero()
            };
        }

        #[cfg(feature = "profile-op-counts")]
        P::op_counters().record_add();

        let h = u2 - self.x;
        let hh = h.square();
        let mut i = hh.double();
        i.double_in_place();
        let j = h * i;
        let r = (s2 - self.y).double();
        let v = self.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;

        Self::new(x3, y3, z3)
    }

    /// Checks `Y^2 = X^3 + b * Z^6`, the curve equation in Jacobian form.
    pub fn is_well_formed(&self) -> bool {
        if self.is_zero() {
            return true;
        }

        let x2 = self.x.square();
        let y2 = self.y.square();
        let z2 = self.z.square();
        let z6 = z2.square() * z2;

        y2 == x2 * self.x + P::mul_by_b(&z6)
    }

    /// Generator times a uniformly random scalar.
    pub fn random_element<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::one() * Fr::random(rng)
    }

    /// Brings every point to special form with one shared inversion.
    ///
    /// Fails without touching `points` if any of them is the identity.
    #[tracing::instrument(skip_all, name = "Jacobian::batch_to_special_all_non_zeros")]
    pub fn batch_to_special_all_non_zeros(points: &mut [Self]) -> Result<(), CurveError> {
        if let Some(index) = points.iter().position(Self::is_zero) {
            return Err(CurveError::IdentityInBatch { index });
        }
        if points.is_empty() {
            return Ok(());
        }

        // prefix[i] = z_0 * .. * z_{i-1}
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = P::BaseField::ONE;
        for point in points.iter() {
            prefix.push(acc);
            acc *= point.z;
        }

        // NOTE product of non-zero Z values is non-zero
        let mut acc_inv = acc.inverse().expect("product of non-zero Z is invertible");
        for (point, prefix) in points.iter_mut().zip(prefix).rev() {
            let z_inv = acc_inv * prefix;
            acc_inv *= point.z;

            let z_inv2 = z_inv.square();
            point.x *= z_inv2;
            point.y *= z_inv2 * z_inv;
            point.z = P::BaseField::ONE;
        }

        tracing::trace!(group = P::NAME, count = points.len(), "batch normalized");
        Ok(())
    }

    /// Scalar multiplication with a wNAF window chosen for `scalar`'s length.
    pub fn mul_scalar<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        opt_window_wnaf_exp(self, scalar, scalar.num_bits())
    }

    #[inline]
    pub fn size_in_bits() -> usize {
        P::SIZE_IN_BITS
    }

    #[inline]
    pub fn base_field_char() -> <Fq as PrimeField>::BigInt {
        crate::fields::base_field_char()
    }

    /// Order of the group.
    #[inline]
    pub fn order() -> BigInt<4> {
        crate::fields::scalar_field_char()
    }
}

impl<P: CurveParams> Default for Jacobian<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: CurveParams> PartialEq for Jacobian<P> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        if other.is_zero() {
            return false;
        }

        // X1 * Z2^2 == X2 * Z1^2 and Y1 * Z2^3 == Y2 * Z1^3
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        if self.x * z2z2 != other.x * z1z1 {
            return false;
        }

        self.y * other.z * z2z2 == other.y * self.z * z1z1
    }
}

impl<P: CurveParams> Eq for Jacobian<P> {}

impl<P: CurveParams> Group for Jacobian<P> {
    #[inline]
    fn identity() -> Self {
        Self::zero()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_zero()
    }

    #[inline]
    fn generator() -> Self {
        Self::one()
    }

    #[inline]
    fn double(&self) -> Self {
        self.dbl()
    }

    #[inline]
    fn negate(&self) -> Self {
        -*self
    }

    #[inline]
    fn wnaf_window_table() -> &'static [usize] {
        P::wnaf_window_table()
    }

    #[inline]
    fn fixed_base_exp_window_table() -> &'static [usize] {
        P::fixed_base_exp_window_table()
    }
}

impl<P: CurveParams> Neg for Jacobian<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            return self;
        }
        Self::new(self.x, -self.y, self.z)
    }
}

impl<P: CurveParams> Add for Jacobian<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Jacobian::add(self, &other)
    }
}

impl<P: CurveParams> AddAssign for Jacobian<P> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = Jacobian::add(*self, &other);
    }
}

impl<P: CurveParams> Sub for Jacobian<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Jacobian::add(self, &-other)
    }
}

impl<P: CurveParams> SubAssign for Jacobian<P> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<P: CurveParams> Sum for Jacobian<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| Jacobian::add(acc, &p))
    }
}

impl<P: CurveParams> Mul<Fr> for Jacobian<P> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: Fr) -> Self {
        self.mul_scalar(&scalar.into_bigint())
    }
}

impl<P: CurveParams> Mul<Jacobian<P>> for Fr {
    type Output = Jacobian<P>;

    #[inline]
    fn mul(self, point: Jacobian<P>) -> Jacobian<P> {
        point * self
    }
}

impl<P: CurveParams> MulAssign<Fr> for Jacobian<P> {
    #[inline]
    fn mul_assign(&mut self, scalar: Fr) {
        *self = *self * scalar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Fq2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity() {
        assert!(G1::zero().is_zero());
        assert!(!G1::one().is_zero());
        assert!(G2::zero().is_special());
        assert_eq!(G1::default(), G1::zero());

        let other_identity = G1::new(Fq::from(5u64), Fq::from(7u64), Fq::ZERO);
        assert_eq!(other_identity, G1::zero());
        assert_ne!(G1::one(), G1::zero());
        assert_ne!(G1::zero(), G1::one());
    }

    #[test]
    fn test_equality_is_projective() {
        let g = G1::one();
        let lambda = Fq::from(0x1234_5678u64);
        let scaled = G1::new(
            g.x * lambda.square(),
            g.y * lambda.square() * lambda,
            lambda,
        );
        assert_eq!(scaled, g);
        assert_ne!(scaled, -g);
    }

    #[test]
    fn test_coord_access() {
        let mut g = G2::one();
        assert_eq!(g.coord(0), Ok(&G2Params::GENERATOR_X));
        assert_eq!(g.coord(1), Ok(g.y()));
        assert_eq!(g.coord(2), Ok(&Fq2::ONE));
        assert_eq!(g.coord(3), Err(CurveError::InvalidCoordinateIndex(3)));

        *g.coord_mut(2).unwrap() = Fq2::ZERO;
        assert!(g.is_zero());
        assert!(g.coord_mut(7).is_err());
    }

    #[test]
    fn test_to_affine_coordinates() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = G1::random_element(&mut rng);
        let mut q = p;
        q.to_affine_coordinates();
        assert_eq!(q.z, Fq::ONE);
        assert!(q.is_special());
        assert_eq!(p, q);

        let mut zero = G1::new(Fq::from(3u64), Fq::from(4u64), Fq::ZERO);
        zero.to_affine_coordinates();
        assert_eq!((zero.x, zero.y, zero.z), (Fq::ZERO, Fq::ONE, Fq::ZERO));
    }

    #[test]
    fn test_add_degenerate_cases() {
        let g = G2::one();
        assert_eq!(g.add(&g), g.dbl());
        assert!(g.add(&-g).is_zero());
        assert_eq!(g.add(&G2::zero()), g);
        assert_eq!(G2::zero().add(&g), g);
        assert!(G2::zero().dbl().is_zero());
    }

    #[test]
    fn test_mixed_add_degenerate_cases() {
        let g = G1::one();
        let two_g = g.dbl();
        assert_eq!(g.mixed_add(&g), two_g);
        assert!(g.mixed_add(&-g).is_zero());
        assert_eq!(G1::zero().mixed_add(&g), g);
        assert_eq!(two_g.mixed_add(&G1::zero()), two_g);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "mixed_add requires")]
    fn test_mixed_add_rejects_non_special() {
        let g = G1::one();
        let two_g = g.dbl();
        let _ = g.mixed_add(&two_g);
    }

    #[test]
    fn test_well_formed() {
        assert!(G1::zero().is_well_formed());
        assert!(G1::one().is_well_formed());
        assert!(G2::one().is_well_formed());
        assert!(G1::one().dbl().is_well_formed());

        let off_curve = G1::new(Fq::ONE, Fq::from(3u64), Fq::ONE);
        assert!(!off_curve.is_well_formed());
        let off_twist = G2::new(Fq2::ONE, Fq2::from(2u64), Fq2::ONE);
        assert!(!off_twist.is_well_formed());
    }

    #[test]
    fn test_batch_rejects_identity() {
        let g = G1::one();
        let mut points = vec![g.dbl(), G1::zero(), g];
        let before = points.clone();
        assert_eq!(
            G1::batch_to_special_all_non_zeros(&mut points),
            Err(CurveError::IdentityInBatch { index: 1 })
        );
        for (after, before) in points.iter().zip(&before) {
            assert_eq!((after.x, after.y, after.z), (before.x, before.y, before.z));
        }

        let mut empty: Vec<G1> = Vec::new();
        assert!(G1::batch_to_special_all_non_zeros(&mut empty).is_ok());
    }

    #[test]
    fn test_sizes() {
        assert_eq!(G1::size_in_bits(), 255);
        assert_eq!(G2::size_in_bits(), 509);
        assert_eq!(G1::order(), Fr::MODULUS);
        assert_eq!(G2::base_field_char(), Fq::MODULUS);
    }
}

//! Curve parameters for the two alt_bn128 groups.
//!
//! G1: y^2 = x^3 + 3 over Fq.
//! G2: y^2 = x^3 + 3 / (9 + u) over Fq2 (sextic D-twist).

use ark_ff::{AdditiveGroup, Field, MontFp, PrimeField};
use core::fmt::Debug;
use once_cell::sync::Lazy;

use crate::encoding::FieldCodec;
use crate::fields::{Fq, Fq2, Fr, TWIST};
use crate::profiling::OpCounters;
use crate::window::{
    derive_fixed_base_window_table, derive_wnaf_window_table, OpCosts,
    FIXED_BASE_TABLE_MAX_WINDOW, WNAF_TABLE_MAX_WINDOW,
};

/// Everything the generic Jacobian group law needs to know about a curve
/// `y^2 = x^3 + b` over `BaseField`.
pub trait CurveParams: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    /// Field of the coordinates; the curve equation is checked in it too.
    type BaseField: Field + FieldCodec;

    const NAME: &'static str;
    const GENERATOR_X: Self::BaseField;
    const GENERATOR_Y: Self::BaseField;
    /// Bits needed to encode one point: the coordinate field plus a flag.
    const SIZE_IN_BITS: usize;
    const COSTS: OpCosts;

    fn coeff_b() -> Self::BaseField;

    #[inline]
    fn mul_by_b(elt: &Self::BaseField) -> Self::BaseField {
        *elt * Self::coeff_b()
    }

    fn wnaf_window_table() -> &'static [usize];
    fn fixed_base_exp_window_table() -> &'static [usize];
    fn op_counters() -> &'static OpCounters;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G1Params;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G2Params;

// One Jacobian addition is 11M + 5S, one doubling 2M + 5S. Over Fq2 a
// multiplication costs three Fq multiplications and a squaring two.
const G1_COSTS: OpCosts = OpCosts {
    add: 16.0,
    dbl: 7.0,
};
const G2_COSTS: OpCosts = OpCosts {
    add: 43.0,
    dbl: 16.0,
};

static G1_WNAF_WINDOW_TABLE: Lazy<Vec<usize>> =
    Lazy::new(|| derive_wnaf_window_table(&G1_COSTS, WNAF_TABLE_MAX_WINDOW));
static G2_WNAF_WINDOW_TABLE: Lazy<Vec<usize>> =
    Lazy::new(|| derive_wnaf_window_table(&G2_COSTS, WNAF_TABLE_MAX_WINDOW));

static G1_FIXED_BASE_WINDOW_TABLE: Lazy<Vec<usize>> = Lazy::new(|| {
    derive_fixed_base_window_table(
        &G1_COSTS,
        Fr::MODULUS_BIT_SIZE as usize,
        FIXED_BASE_TABLE_MAX_WINDOW,
    )
});
static G2_FIXED_BASE_WINDOW_TABLE: Lazy<Vec<usize>> = Lazy::new(|| {
    derive_fixed_base_window_table(
        &G2_COSTS,
        Fr::MODULUS_BIT_SIZE as usize,
        FIXED_BASE_TABLE_MAX_WINDOW,
    )
});

/// b' = b / xi
static G2_COEFF_B: Lazy<Fq2> = Lazy::new(|| {
    // NOTE xi = 9 + u is a non-zero constant, so the inverse exists
    let twist_inv = TWIST.inverse().expect("twist element is non-zero");
    Fq2::from(3u64) * twist_inv
});

static G1_OP_COUNTERS: OpCounters = OpCounters::new();
static G2_OP_COUNTERS: OpCounters = OpCounters::new();

impl CurveParams for G1Params {
    type BaseField = Fq;

    const NAME: &'static str = "alt_bn128_G1";
    const GENERATOR_X: Fq = MontFp!("1");
    const GENERATOR_Y: Fq = MontFp!("2");
    const SIZE_IN_BITS: usize = Fq::MODULUS_BIT_SIZE as usize + 1;
    const COSTS: OpCosts = G1_COSTS;

    #[inline]
    fn coeff_b() -> Fq {
        MontFp!("3")
    }

    #[inline]
    fn mul_by_b(elt: &Fq) -> Fq {
        elt.double() + elt
    }

    fn wnaf_window_table() -> &'static [usize] {
        &G1_WNAF_WINDOW_TABLE
    }

    fn fixed_base_exp_window_table() -> &'static [usize] {
        &G1_FIXED_BASE_WINDOW_TABLE
    }

    fn op_counters() -> &'static OpCounters {
        &G1_OP_COUNTERS
    }
}

impl CurveParams for G2Params {
    type BaseField = Fq2;

    const NAME: &'static str = "alt_bn128_G2";
    const GENERATOR_X: Fq2 = Fq2::new(
        MontFp!("10857046999023057135944570762232829481370756359578518086990519993285655852781"),
        MontFp!("11559732032986387107991004021392285783925812861821192530917403151452391805634"),
    );
    const GENERATOR_Y: Fq2 = Fq2::new(
        MontFp!("8495653923123431417604973247489272438418190587263600148770280649306958101930"),
        MontFp!("4082367875863433681332203403145435568316851327593401208105741076214120093531"),
    );
    const SIZE_IN_BITS: usize = 2 * Fq::MODULUS_BIT_SIZE as usize + 1;
    const COSTS: OpCosts = G2_COSTS;

    #[inline]
    fn coeff_b() -> Fq2 {
        *G2_COEFF_B
    }

    fn wnaf_window_table() -> &'static [usize] {
        &G2_WNAF_WINDOW_TABLE
    }

    fn fixed_base_exp_window_table() -> &'static [usize] {
        &G2_FIXED_BASE_WINDOW_TABLE
    }

    fn op_counters() -> &'static OpCounters {
        &G2_OP_COUNTERS
    }
}

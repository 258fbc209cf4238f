//! Group arithmetic on the alt_bn128 (BN254) curve.
//!
//! This crate provides the base group G1 over `Fq` and the twist group G2
//! over `Fq2` in Jacobian coordinates, windowed NAF scalar multiplication
//! with cost-model window selection, fixed-base batch exponentiation, and
//! text/binary point encodings. Field arithmetic comes from `ark-bn254`.
//!
//! Features:
//! - `parallel`: run [`batch_exp`] on the rayon thread pool.
//! - `profile-op-counts`: count additions and doublings per group, see
//!   [`CurveParams::op_counters`].

mod encoding;
mod errors;
mod fields;
mod fixed_base;
mod g2;
mod group;
mod jacobian;
mod params;
mod profiling;
mod random;
mod wnaf;
mod window;


pub use encoding::{decode_points, encode_points, FieldCodec};
pub use errors::CurveError;
pub use fields::{
    base_field_char, scalar_field_char, Fq, Fq2, Fr, TWIST, TWIST_MUL_BY_Q_X, TWIST_MUL_BY_Q_Y,
};
pub use fixed_base::{batch_exp, WindowTable, MAX_FIXED_BASE_WINDOW};
pub use group::{Group, ScalarBits};
pub use jacobian::{Jacobian, G1, G2};
pub use params::{CurveParams, G1Params, G2Params};
pub use profiling::{OpCounters, OpCountsSnapshot};
pub use random::RandomField;
pub use window::{
    derive_fixed_base_window_table, derive_wnaf_window_table, fixed_base_window_size,
    select_window, wnaf_window_size, OpCosts, FIXED_BASE_TABLE_MAX_WINDOW, MAX_WINDOW_SIZE,
    MIN_WINDOW_SIZE, WNAF_TABLE_MAX_WINDOW,
};
pub use wnaf::{find_wnaf, fixed_window_wnaf_exp, opt_window_wnaf_exp};

//! Window-size selection for wNAF and fixed-base exponentiation.
//!
//! Both selectors use threshold tables: entry `i` holds the smallest input
//! size (scalar bit length for wNAF, number of scalars for fixed-base) from
//! which window `i + offset` is the cheapest choice. A zero entry past index
//! 0 marks a window that is never optimal. Tables are derived from an
//! operation-count cost model of the group they serve.

use crate::group::Group;

/// Smallest wNAF width. Width 2 is the plain signed binary NAF.
pub const MIN_WINDOW_SIZE: usize = 2;

/// Largest wNAF width accepted by `find_wnaf`.
pub const MAX_WINDOW_SIZE: usize = 24;

/// Widest window considered when deriving the wNAF table.
pub const WNAF_TABLE_MAX_WINDOW: usize = 12;

/// Widest window considered when deriving the fixed-base table.
pub const FIXED_BASE_TABLE_MAX_WINDOW: usize = 20;

/// Relative cost of the two group-law primitives, in base-field
/// multiplication equivalents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OpCosts {
    pub add: f64,
    pub dbl: f64,
}

impl OpCosts {
    /// Expected cost of a width-`window` wNAF multiplication by a
    /// `scalar_bits`-bit scalar: building the odd multiples `1, 3, ..,
    /// 2^(w-1) - 1` (one doubling and `2^(w-2) - 1` additions), one doubling
    /// per bit, and one addition per non-zero digit at density `1 / (w + 1)`.
    pub fn wnaf_cost(&self, window: usize, scalar_bits: f64) -> f64 {
        let (intercept, slope) = self.wnaf_line(window);
        intercept + slope * scalar_bits
    }

    /// Cost of a fixed-base batch of `num_scalars` multiplications with
    /// `scalar_size`-bit scalars: table construction plus one addition per
    /// window row for every scalar.
    pub fn fixed_base_cost(&self, window: usize, scalar_size: usize, num_scalars: f64) -> f64 {
        let (intercept, slope) = self.fixed_base_line(window, scalar_size);
        intercept + slope * num_scalars
    }

    fn wnaf_line(&self, window: usize) -> (f64, f64) {
        let table_adds = (1u64 << (window - MIN_WINDOW_SIZE)) as f64 - 1.0;
        let precompute = self.dbl + table_adds * self.add;
        let per_bit = self.dbl + self.add / (window as f64 + 1.0);
        (precompute, per_bit)
    }

    fn fixed_base_line(&self, window: usize, scalar_size: usize) -> (f64, f64) {
        let rows = scalar_size.div_ceil(window) as f64;
        let table = rows * (1u64 << window) as f64 * self.add + scalar_size as f64 * self.dbl;
        (table, rows * self.add)
    }
}

/// Threshold table for wNAF: index `i` is width `i + MIN_WINDOW_SIZE`, the
/// entry is a scalar bit length.
pub fn derive_wnaf_window_table(costs: &OpCosts, max_window: usize) -> Vec<usize> {
    let lines: Vec<(f64, f64)> = (MIN_WINDOW_SIZE..=max_window)
        .map(|w| costs.wnaf_line(w))
        .collect();
    let table = envelope_thresholds(&lines);
    tracing::debug!(?costs, ?table, "derived wNAF window table");
    table
}

/// Threshold table for fixed-base exponentiation: index `i` is window
/// `i + 1`, the entry is a number of scalars.
pub fn derive_fixed_base_window_table(
    costs: &OpCosts,
    scalar_size: usize,
    max_window: usize,
) -> Vec<usize> {
    let lines: Vec<(f64, f64)> = (1..=max_window)
        .map(|w| costs.fixed_base_line(w, scalar_size))
        .collect();
    let table = envelope_thresholds(&lines);
    tracing::debug!(?costs, scalar_size, ?table, "derived fixed-base window table");
    table
}

/// For cost lines `intercept + slope * x`, returns for each line the smallest
/// non-negative integer `x` at which it is the minimum (ties go to the earlier
/// line), or 0 if it never is. Entry 0 is always 0.
fn envelope_thresholds(lines: &[(f64, f64)]) -> Vec<usize> {
    let mut table = Vec::with_capacity(lines.len());
    for (i, &(a_i, s_i)) in lines.iter().enumerate() {
        if i == 0 {
            table.push(0);
            continue;
        }

        // Feasible integer range [lo, hi] where line i wins.
        let mut lo = 0f64;
        let mut hi = f64::INFINITY;
        for (j, &(a_j, s_j)) in lines.iter().enumerate() {
            if j == i {
                continue;
            }
            // line i beats line j iff (s_i - s_j) * x < a_j - a_i, or <= for j > i.
            let strict = j < i;
            let ds = s_i - s_j;
            let da = a_j - a_i;
            if ds == 0.0 {
                if da < 0.0 || (strict && da == 0.0) {
                    hi = -1.0;
                }
            } else if ds > 0.0 {
                let bound = da / ds;
                let max_x = if strict && bound.fract() == 0.0 {
                    bound - 1.0
                } else {
                    bound.floor()
                };
                hi = hi.min(max_x);
            } else {
                let bound = da / ds;
                let min_x = if strict {
                    bound.floor() + 1.0
                } else {
                    bound.ceil()
                };
                lo = lo.max(min_x);
            }
        }

        if lo <= hi && lo.is_finite() {
            table.push(lo.max(1.0) as usize);
        } else {
            table.push(0);
        }
    }
    table
}

/// Largest window whose non-zero threshold is at most `value`, or
/// `min_window` if none is.
pub fn select_window(table: &[usize], value: usize, min_window: usize) -> usize {
    table
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .find(|&(_, &threshold)| threshold != 0 && value >= threshold)
        .map_or(min_window, |(i, _)| i + min_window)
}

/// wNAF width for a scalar of `scalar_bits` bits in group `G`.
pub fn wnaf_window_size<G: Group>(scalar_bits: usize) -> usize {
    select_window(G::wnaf_window_table(), scalar_bits, MIN_WINDOW_SIZE)
}

/// Fixed-base window for a batch of `num_scalars` multiplications in `G`.
pub fn fixed_base_window_size<G: Group>(num_scalars: usize) -> usize {
    select_window(G::fixed_base_exp_window_table(), num_scalars, 1)
}

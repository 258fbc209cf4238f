//! Width-w non-adjacent form and windowed scalar multiplication.

use crate::group::{bit_length, Group, ScalarBits};
use crate::window::{wnaf_window_size, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};

/// Width-`window_size` NAF of `scalar`, least significant digit first.
///
/// The result has `scalar.num_bits() + 1` digits. Every digit is zero or odd
/// with absolute value below `2^(window_size - 1)`, and each non-zero digit
/// is followed by at least `window_size - 1` zeros.
///
/// # Panics
///
/// Panics if `window_size` is outside `[MIN_WINDOW_SIZE, MAX_WINDOW_SIZE]`.
pub fn find_wnaf<S: ScalarBits + ?Sized>(window_size: usize, scalar: &S) -> Vec<i64> {
    assert!(
        (MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&window_size),
        "wNAF window size {window_size} outside [{MIN_WINDOW_SIZE}, {MAX_WINDOW_SIZE}]"
    );

    let mut residual = scalar.to_u64_limbs();
    let num_bits = bit_length(&residual);
    // room for the carry out of the top limb when a negative digit is taken
    residual.push(0);

    let full = 1i64 << window_size;
    let half = 1i64 << (window_size - 1);
    let mask = (1u64 << window_size) - 1;

    let mut digits = Vec::with_capacity(num_bits + 1);
    for _ in 0..=num_bits {
        let mut digit = 0i64;
        if residual[0] & 1 == 1 {
            digit = (residual[0] & mask) as i64;
            if digit >= half {
                digit -= full;
            }

            if digit < 0 {
                add_small(&mut residual, digit.unsigned_abs());
            } else {
                sub_small(&mut residual, digit as u64);
            }
        }
        digits.push(digit);
        shr_one(&mut residual);
    }

    debug_assert!(residual.iter().all(|&limb| limb == 0));
    digits
}

/// `scalar * base` with a width-`window_size` wNAF.
pub fn fixed_window_wnaf_exp<G: Group, S: ScalarBits + ?Sized>(
    window_size: usize,
    base: &G,
    scalar: &S,
) -> G {
    let naf = find_wnaf(window_size, scalar);
    let table = odd_multiples(base, window_size);

    let mut res = G::identity();
    let mut found_nonzero = false;
    for &digit in naf.iter().rev() {
        if found_nonzero {
            res = res.double();
        }

        if digit != 0 {
            found_nonzero = true;
            let entry = table[(digit.unsigned_abs() / 2) as usize];
            if digit > 0 {
                res += entry;
            } else {
                res -= entry;
            }
        }
    }

    res
}

/// `scalar * base`, with the window picked from the group's window table
/// for a `scalar_bits`-bit scalar.
pub fn opt_window_wnaf_exp<G: Group, S: ScalarBits + ?Sized>(
    base: &G,
    scalar: &S,
    scalar_bits: usize,
) -> G {
    let window_size = wnaf_window_size::<G>(scalar_bits);
    tracing::trace!(scalar_bits, window_size, "wNAF window");
    fixed_window_wnaf_exp(window_size, base, scalar)
}

/// `[1, 3, 5, .., 2^(w-1) - 1] * base`
fn odd_multiples<G: Group>(base: &G, window_size: usize) -> Vec<G> {
    let len = 1usize << (window_size - 2);
    let twice = base.double();

    let mut table = Vec::with_capacity(len);
    let mut current = *base;
    for _ in 0..len {
        table.push(current);
        current += twice;
    }
    table
}

fn add_small(limbs: &mut [u64], value: u64) {
    let mut carry = value;
    for limb in limbs.iter_mut() {
        let (sum, overflow) = limb.overflowing_add(carry);
        *limb = sum;
        if !overflow {
            return;
        }
        carry = 1;
    }
}

fn sub_small(limbs: &mut [u64], value: u64) {
    let mut borrow = value;
    for limb in limbs.iter_mut() {
        let (diff, underflow) = limb.overflowing_sub(borrow);
        *limb = diff;
        if !underflow {
            return;
        }
        borrow = 1;
    }
}

fn shr_one(limbs: &mut [u64]) {
    for i in 0..limbs.len() {
        let high = limbs.get(i + 1).map_or(0, |next| next << 63);
        limbs[i] = (limbs[i] >> 1) | high;
    }
}

//! Windowed exponentiation of one fixed base by many scalars.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::errors::CurveError;
use crate::group::{bit_length, test_bit, Group, ScalarBits};
use crate::window::fixed_base_window_size;

/// Largest window accepted by [`WindowTable::new`]. Each row holds `2^window`
/// points.
pub const MAX_FIXED_BASE_WINDOW: usize = 24;

/// Precomputed multiples of a fixed base.
///
/// Row `i` holds `j * 2^(i * window) * base` for `j < 2^window`; the last row
/// only covers the bits left over from `scalar_size`.
#[derive(Clone, Debug)]
pub struct WindowTable<G> {
    scalar_size: usize,
    window: usize,
    rows: Vec<Vec<G>>,
}

impl<G: Group> WindowTable<G> {
    /// # Panics
    ///
    /// Panics if `window` is zero or above [`MAX_FIXED_BASE_WINDOW`].
    #[tracing::instrument(skip_all, name = "WindowTable::new")]
    pub fn new(base: &G, scalar_size: usize, window: usize) -> Self {
        assert!(
            (1..=MAX_FIXED_BASE_WINDOW).contains(&window),
            "fixed-base window {window} outside [1, {MAX_FIXED_BASE_WINDOW}]"
        );

        let num_rows = scalar_size.div_ceil(window);
        let mut rows = Vec::with_capacity(num_rows);
        let mut row_base = *base;

        for row_index in 0..num_rows {
            let row_bits = if row_index + 1 == num_rows {
                scalar_size - row_index * window
            } else {
                window
            };

            let mut row = Vec::with_capacity(1 << row_bits);
            let mut multiple = G::identity();
            for _ in 0..(1usize << row_bits) {
                row.push(multiple);
                multiple += row_base;
            }
            rows.push(row);

            for _ in 0..window {
                row_base = row_base.double();
            }
        }

        tracing::debug!(scalar_size, window, num_rows, "built fixed-base table");
        WindowTable {
            scalar_size,
            window,
            rows,
        }
    }

    /// Table with the window the group's fixed-base table recommends for
    /// `num_scalars` multiplications.
    pub fn for_batch(base: &G, scalar_size: usize, num_scalars: usize) -> Self {
        let window = fixed_base_window_size::<G>(num_scalars);
        Self::new(base, scalar_size, window)
    }

    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    #[inline]
    pub fn scalar_size(&self) -> usize {
        self.scalar_size
    }

    /// `scalar * base`, one addition per row.
    pub fn exp<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Result<G, CurveError> {
        let limbs = scalar.to_u64_limbs();
        let bits = bit_length(&limbs);
        if bits > self.scalar_size {
            return Err(CurveError::ScalarTooLarge {
                bits,
                max: self.scalar_size,
            });
        }

        let mut res = G::identity();
        for (row_index, row) in self.rows.iter().enumerate() {
            let offset = row_index * self.window;
            let entry = (0..self.window)
                .filter(|&i| test_bit(&limbs, offset + i))
                .fold(0usize, |acc, i| acc | (1 << i));
            res += row[entry];
        }
        Ok(res)
    }
}

/// `scalar * base` for every scalar, sharing one table.
#[tracing::instrument(skip_all, name = "batch_exp")]
pub fn batch_exp<G, S>(table: &WindowTable<G>, scalars: &[S]) -> Result<Vec<G>, CurveError>
where
    G: Group + Send + Sync,
    S: ScalarBits + Sync,
{
    tracing::debug!(num_scalars = scalars.len(), window = table.window(), "batch exp");

    #[cfg(feature = "parallel")]
    let results = scalars.par_iter().map(|scalar| table.exp(scalar)).collect();

    #[cfg(not(feature = "parallel"))]
    let results = scalars.iter().map(|scalar| table.exp(scalar)).collect();

    results
}

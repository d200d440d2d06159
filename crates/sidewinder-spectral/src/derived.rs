// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Construction of the derived square matrix.
//!
//! For an m×n candidate M, the derived matrix has order m·n and is indexed
//! by flattened row-column pairs i = (a, b), j = (c, d) under row-major
//! linearization. Each entry couples four source entries:
//!
//! - it is zero whenever M\[a,b\], M\[c,d\], or M\[a,d\] is zero;
//! - otherwise it is M\[c,b\] · √M\[a,b\] · √M\[c,d\] · √M\[a,d\].
//!
//! The un-rooted factor reads row c, column b — the construction is
//! asymmetric in the roles of (a, b) and (c, d), and that asymmetry carries
//! the homomorphism count the spectrum encodes. The derived matrix is
//! generally non-symmetric and is always rebuilt fresh from the candidate;
//! it is never mutated in place.
//!
//! This construction is O((m·n)²) and dominates the cost of every
//! evaluation, so the inner loop works on the raw row-major buffer with the
//! square roots of all entries precomputed once per call.

use nalgebra::{DMatrix, Scalar};
use num_traits::Float;
use sidewinder_model::{index::PairIndex, matrix::DensityMatrix};

/// Builds the derived square matrix of order `matrix.order()`.
pub fn derived_matrix<T>(matrix: &DensityMatrix<T>) -> DMatrix<T>
where
    T: Scalar + Float,
{
    let cols = matrix.cols();
    let order = matrix.order();
    let source = matrix.as_slice();

    // Square roots of every source entry, computed once per evaluation.
    let sqrt: Vec<T> = source.iter().map(|&value| value.sqrt()).collect();

    let mut derived = DMatrix::<T>::zeros(order, order);
    for i in 0..order {
        let (a, b) = matrix.split_pair(PairIndex::new(i));
        let (a, b) = (a.get(), b.get());

        for j in 0..order {
            let (c, d) = (j / cols, j % cols);

            let ab = source[a * cols + b];
            let cd = source[c * cols + d];
            let ad = source[a * cols + d];

            if ab == T::zero() || cd == T::zero() || ad == T::zero() {
                continue;
            }

            // The un-rooted factor is M[c,b], not M[a,b].
            derived[(i, j)] = source[c * cols + b] * sqrt[a * cols + b] * sqrt[c * cols + d] * sqrt[a * cols + d];
        }
    }

    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_all_ones_candidate_yields_all_ones_derived() {
        let matrix = DensityMatrix::filled(2, 2, 1.0).unwrap();
        let derived = derived_matrix(&matrix);

        assert_eq!(derived.nrows(), 4);
        assert_eq!(derived.ncols(), 4);
        assert!(derived.iter().all(|&v| (v - 1.0f64).abs() < TOLERANCE));
    }

    #[test]
    fn test_zero_candidate_yields_zero_derived() {
        let matrix = DensityMatrix::filled(3, 2, 0.0).unwrap();
        let derived = derived_matrix(&matrix);
        assert!(derived.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_entry_formula_is_asymmetric() {
        // M = [[1, 2], [3, 4]].
        let matrix = DensityMatrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let derived = derived_matrix(&matrix);

        // i = 1 -> (a, b) = (0, 1); j = 2 -> (c, d) = (1, 0).
        // Entry = M[1,1] * sqrt(M[0,1]) * sqrt(M[1,0]) * sqrt(M[0,0]).
        let expected = 4.0 * 2.0f64.sqrt() * 3.0f64.sqrt() * 1.0f64.sqrt();
        assert!((derived[(1, 2)] - expected).abs() < TOLERANCE);

        // The mirrored position uses different roles:
        // i = 2 -> (a, b) = (1, 0); j = 1 -> (c, d) = (0, 1).
        // Entry = M[0,0] * sqrt(M[1,0]) * sqrt(M[0,1]) * sqrt(M[1,1]).
        let expected_mirror = 1.0 * 3.0f64.sqrt() * 2.0f64.sqrt() * 4.0f64.sqrt();
        assert!((derived[(2, 1)] - expected_mirror).abs() < TOLERANCE);
        assert!((derived[(1, 2)] - derived[(2, 1)]).abs() > 1.0);
    }

    #[test]
    fn test_zero_entry_clears_all_referencing_cells() {
        // M[0,0] = 0; every derived entry referencing (0,0) through any of
        // the three zero-check positions must vanish.
        let matrix = DensityMatrix::new(2, 2, vec![0.0, 1.0, 1.0, 1.0]).unwrap();
        let derived = derived_matrix(&matrix);

        for j in 0..4 {
            // i = 0 -> (a, b) = (0, 0): the whole row is cleared.
            assert_eq!(derived[(0, j)], 0.0, "row 0 must be cleared at column {}", j);
        }
        for i in 0..4 {
            // j = 0 -> (c, d) = (0, 0): the whole column is cleared.
            assert_eq!(derived[(i, 0)], 0.0, "column 0 must be cleared at row {}", i);
        }

        // i = 1 -> (a, b) = (0, 1), j = 2 -> (c, d) = (1, 0): here
        // M[a,d] = M[0,0] = 0 clears the entry even though M[a,b] and
        // M[c,d] are both positive.
        assert_eq!(derived[(1, 2)], 0.0);

        // An entry referencing only positive cells survives:
        // i = 2 -> (1, 0), j = 3 -> (1, 1), all three checks read 1.
        assert!((derived[(2, 3)] - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_single_cell_candidate() {
        // For a 1x1 matrix [x], the derived matrix is [x^(5/2)].
        let matrix = DensityMatrix::new(1, 1, vec![0.25]).unwrap();
        let derived = derived_matrix(&matrix);
        assert_eq!(derived.nrows(), 1);
        let expected = 0.25f64 * 0.25f64.sqrt() * 0.25f64.sqrt() * 0.25f64.sqrt();
        assert!((derived[(0, 0)] - expected).abs() < TOLERANCE);
    }
}

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

//! The eigenvalue gap of a candidate matrix.
//!
//! The gap compares two quantities derived from a candidate M: the real
//! part of the sum of fifth powers of the derived matrix's eigenvalues,
//! and a mass normalization term `total(M)^15 / (m·n)^10`. A negative gap
//! means the inequality holds for this candidate; a non-negative gap marks
//! a candidate counterexample.
//!
//! The derived matrix is generally non-symmetric, so the spectrum is
//! complex; it is obtained through a real Schur decomposition with a
//! bounded iteration count. Non-convergence propagates as an error rather
//! than being swallowed — a silent wrong score would send the search in an
//! arbitrary direction. The whole computation is deterministic in M.

use crate::{derived::derived_matrix, error::SpectralError};
use nalgebra::{Complex, linalg::Schur};
use num_traits::Float;
use sidewinder_model::matrix::DensityMatrix;
use sidewinder_search::num::SpectralNumeric;

/// Power applied to each eigenvalue before summing.
pub const EIGENVALUE_POWER: u32 = 5;

/// Exponent of the entry total in the normalization term.
pub const TOTAL_EXPONENT: i32 = 15;

/// Exponent of the matrix order in the normalization term.
pub const ORDER_EXPONENT: i32 = 10;

/// Iteration budget for the Schur decomposition. Well-conditioned derived
/// matrices converge orders of magnitude below this.
const MAX_SCHUR_ITERATIONS: usize = 10_000;

/// Computes the inequality gap of a candidate matrix.
///
/// Returns `Re(Σ λ^5) − total^15 / (m·n)^10` over the eigenvalues λ of the
/// derived matrix. For an all-zero candidate the normalization term is
/// skipped and the spectrum sum (then zero) is returned directly.
///
/// # Errors
///
/// Returns [`SpectralError::EigenvalueNonConvergence`] if the Schur
/// decomposition of the derived matrix does not converge; the error carries
/// the candidate for diagnostics.
pub fn eigenvalue_gap<T>(matrix: &DensityMatrix<T>) -> Result<T, SpectralError<T>>
where
    T: SpectralNumeric,
{
    let derived = derived_matrix(matrix);
    let order = derived.nrows();

    let schur = Schur::try_new(derived, T::default_epsilon(), MAX_SCHUR_ITERATIONS).ok_or_else(
        || SpectralError::EigenvalueNonConvergence {
            rows: matrix.rows(),
            cols: matrix.cols(),
            order,
            matrix: matrix.clone(),
        },
    )?;

    let eigenvalues = schur.complex_eigenvalues();

    let mut power_sum = Complex::new(T::zero(), T::zero());
    for eigenvalue in eigenvalues.iter() {
        power_sum = power_sum + eigenvalue.powu(EIGENVALUE_POWER);
    }
    let spectral_sum = power_sum.re;

    let total = matrix.total();
    if total == T::zero() {
        // Degenerate candidate: no mass, no normalization term.
        return Ok(spectral_sum);
    }

    let order_scalar = T::from_usize(order)
        .expect("called `eigenvalue_gap` with a matrix order not representable in the scalar type");
    let normalization =
        Float::powi(total, TOTAL_EXPONENT) / Float::powi(order_scalar, ORDER_EXPONENT);

    Ok(spectral_sum - normalization)
}

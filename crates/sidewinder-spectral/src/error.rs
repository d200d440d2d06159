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

//! Evaluation errors for the spectral objective.
//!
//! The search loop itself cannot fail; the only fallible operation is the
//! eigenvalue decomposition of the derived matrix. When it does not
//! converge, the error carries the candidate matrix that triggered it so a
//! run can be diagnosed and reproduced. There is no retry policy — the
//! error is fatal to the evaluation and propagates out of the run.

use sidewinder_model::matrix::DensityMatrix;
use thiserror::Error;

/// An error produced while evaluating the spectral objective.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError<T> {
    /// The Schur decomposition of the derived matrix did not converge
    /// within the iteration budget.
    #[error(
        "eigenvalue decomposition failed to converge for the derived matrix of a {rows}x{cols} candidate (order {order})"
    )]
    EigenvalueNonConvergence {
        /// Rows of the candidate matrix.
        rows: usize,
        /// Columns of the candidate matrix.
        cols: usize,
        /// Order of the derived matrix.
        order: usize,
        /// The candidate matrix that triggered the failure.
        matrix: DensityMatrix<T>,
    },
}

impl<T> SpectralError<T> {
    /// Returns the candidate matrix that triggered the error.
    #[inline]
    pub fn matrix(&self) -> &DensityMatrix<T> {
        match self {
            SpectralError::EigenvalueNonConvergence { matrix, .. } => matrix,
        }
    }
}

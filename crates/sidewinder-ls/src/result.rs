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

//! Outcome of one local-search round.
//!
//! The round result pairs the best matrix found with the score it was
//! accepted at, so the driver can compare and adopt it without a second
//! evaluation of the same matrix.

use sidewinder_model::matrix::DensityMatrix;

/// The best matrix found by a nested Monte Carlo round, with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedSearchOutcome<T> {
    matrix: DensityMatrix<T>,
    score: T,
}

impl<T> NestedSearchOutcome<T>
where
    T: Copy,
{
    /// Creates a new outcome.
    #[inline]
    pub fn new(matrix: DensityMatrix<T>, score: T) -> Self {
        Self { matrix, score }
    }

    /// Returns the best matrix found.
    #[inline]
    pub fn matrix(&self) -> &DensityMatrix<T> {
        &self.matrix
    }

    /// Returns the score of the best matrix.
    #[inline]
    pub fn score(&self) -> T {
        self.score
    }

    /// Consumes the outcome and returns the matrix and its score.
    #[inline]
    pub fn into_parts(self) -> (DensityMatrix<T>, T) {
        (self.matrix, self.score)
    }
}

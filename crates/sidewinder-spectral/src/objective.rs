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

//! Objective evaluation for the adaptive search.
//!
//! This module defines the scoring interface consumed by the local search
//! and the driver. The design separates the quantity being maximized from
//! the search mechanics, so alternative objectives can be substituted
//! without touching the search loops. The default `ViolationObjective`
//! negates the inequality gap: the search maximizes violation, and a
//! positive score means the gap is negative (the inequality holds).

use crate::{error::SpectralError, gap::eigenvalue_gap};
use sidewinder_model::matrix::DensityMatrix;
use sidewinder_search::num::SpectralNumeric;

/// A trait for scoring candidate matrices.
///
/// Implementations must be deterministic: two evaluations of the same
/// matrix return the same score. The search relies on this to compare
/// candidates scored at different times.
pub trait Objective<T>
where
    T: SpectralNumeric,
{
    /// Returns the name of the objective.
    fn name(&self) -> &str;

    /// Scores a candidate matrix. Larger is better for the search.
    ///
    /// # Errors
    ///
    /// Propagates evaluation failures; the search aborts on the first
    /// error rather than continuing with a corrupt score.
    fn evaluate(&self, matrix: &DensityMatrix<T>) -> Result<T, SpectralError<T>>;
}

impl<T> std::fmt::Debug for dyn Objective<T>
where
    T: SpectralNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Objective {{ name: {} }}", self.name())
    }
}

impl<T> std::fmt::Display for dyn Objective<T>
where
    T: SpectralNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Objective: {}", self.name())
    }
}

/// The violation score: the negated eigenvalue gap.
///
/// Maximizing this score pushes candidates toward a non-negative gap,
/// i.e. toward a counterexample of the inequality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViolationObjective;

impl ViolationObjective {
    /// Creates a new `ViolationObjective`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> Objective<T> for ViolationObjective
where
    T: SpectralNumeric,
{
    fn name(&self) -> &str {
        "ViolationObjective"
    }

    fn evaluate(&self, matrix: &DensityMatrix<T>) -> Result<T, SpectralError<T>> {
        Ok(-eigenvalue_gap(matrix)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let objective = ViolationObjective::new();
        assert_eq!(Objective::<f64>::name(&objective), "ViolationObjective");
    }

    #[test]
    fn test_score_is_negated_gap() {
        let matrix = DensityMatrix::new(2, 2, vec![0.3, 0.8, 0.5, 0.9]).unwrap();
        let objective = ViolationObjective::new();

        let score: f64 = objective.evaluate(&matrix).unwrap();
        let gap = eigenvalue_gap(&matrix).unwrap();
        assert_eq!(score, -gap);
    }

    #[test]
    fn test_score_is_deterministic() {
        let matrix = DensityMatrix::new(2, 2, vec![0.3, 0.8, 0.5, 0.9]).unwrap();
        let objective = ViolationObjective::new();

        let first: f64 = objective.evaluate(&matrix).unwrap();
        let second: f64 = objective.evaluate(&matrix).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

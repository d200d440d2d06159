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

//! Final outcome reporting for adaptive search runs.
//!
//! This module encapsulates the result produced by the AMCS driver: the best
//! matrix discovered, its violation score and the corresponding inequality
//! gap, and aggregate run statistics. The `AmcsOutcome` serves as a single
//! transport object for downstream consumers such as the CLI or experiment
//! scripts. The sign convention is fixed here once: the search maximizes the
//! violation score, which is the negated gap, so a non-negative gap marks a
//! candidate counterexample.

use crate::{num::SpectralNumeric, stats::AmcsStatistics};
use sidewinder_model::matrix::DensityMatrix;

/// Result of an AMCS run after the level budget is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct AmcsOutcome<T> {
    matrix: DensityMatrix<T>,
    score: T,
    gap: T,
    statistics: AmcsStatistics,
}

impl<T> AmcsOutcome<T>
where
    T: SpectralNumeric,
{
    /// Creates a new outcome from the final incumbent.
    ///
    /// The `gap` is the raw inequality gap; `score` is its negation as
    /// maximized by the search.
    #[inline]
    pub fn new(matrix: DensityMatrix<T>, score: T, gap: T, statistics: AmcsStatistics) -> Self {
        Self {
            matrix,
            score,
            gap,
            statistics,
        }
    }

    /// Returns the best matrix found.
    #[inline]
    pub fn matrix(&self) -> &DensityMatrix<T> {
        &self.matrix
    }

    /// Returns the final violation score (the maximized quantity).
    #[inline]
    pub fn score(&self) -> T {
        self.score
    }

    /// Returns the final inequality gap.
    #[inline]
    pub fn gap(&self) -> T {
        self.gap
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &AmcsStatistics {
        &self.statistics
    }

    /// Returns `true` if the final matrix is a candidate counterexample,
    /// i.e. the inequality gap is non-negative.
    #[inline]
    pub fn is_counterexample(&self) -> bool {
        self.gap >= T::zero()
    }

    /// Consumes the outcome and returns the best matrix.
    #[inline]
    pub fn into_matrix(self) -> DensityMatrix<T> {
        self.matrix
    }
}

impl<T> std::fmt::Display for AmcsOutcome<T>
where
    T: SpectralNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AMCS Outcome")?;
        writeln!(f, "   Final Score: {:.4e}", self.score)?;
        writeln!(f, "   Final Gap:   {:.4e}", self.gap)?;
        writeln!(
            f,
            "   Verdict:     {}",
            if self.is_counterexample() {
                "candidate counterexample (gap >= 0)"
            } else {
                "inequality holds for this matrix"
            }
        )?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(score: f64, gap: f64) -> AmcsOutcome<f64> {
        let matrix = DensityMatrix::filled(2, 2, 1.0).unwrap();
        AmcsOutcome::new(matrix, score, gap, AmcsStatistics::default())
    }

    #[test]
    fn test_accessors() {
        let o = outcome(2.5, -2.5);
        assert_eq!(o.score(), 2.5);
        assert_eq!(o.gap(), -2.5);
        assert_eq!(o.matrix().shape(), (2, 2));
        assert_eq!(o.statistics().rounds, 0);
    }

    #[test]
    fn test_counterexample_verdict_follows_gap_sign() {
        assert!(!outcome(2.5, -2.5).is_counterexample());
        assert!(outcome(0.0, 0.0).is_counterexample());
        assert!(outcome(-1.0, 1.0).is_counterexample());
    }

    #[test]
    fn test_display_mentions_verdict() {
        let rendered = format!("{}", outcome(1.0, -1.0));
        assert!(rendered.contains("inequality holds"));

        let rendered = format!("{}", outcome(-1.0, 1.0));
        assert!(rendered.contains("candidate counterexample"));
    }

    #[test]
    fn test_into_matrix_returns_final_matrix() {
        let m = outcome(1.0, -1.0).into_matrix();
        assert_eq!(m.shape(), (2, 2));
    }
}

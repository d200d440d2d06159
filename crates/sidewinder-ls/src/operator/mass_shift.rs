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

//! The Mass Shift Operator.
//!
//! This operator perturbs a candidate by moving a small random amount of
//! mass between two independently chosen cells: one cell is increased by a
//! uniform draw Δ, another is decreased by the same Δ and clamped at zero.
//! The two cells may coincide, in which case the net change collapses to
//! the clamp effect alone. The increase has no upper bound — entries may
//! grow past 1, and any cap on the value range is a caller-level decision.
//!
//! # Search Space
//!
//! Each call touches at most two entries, so the neighborhood radius stays
//! small and the spectral objective changes smoothly between neighbors.
//! The draw range defaults to `[0.01, 0.05]`.

use crate::operator::PerturbationOperator;
use num_traits::Float;
use rand::Rng;
use sidewinder_model::{
    index::{ColIndex, RowIndex},
    matrix::DensityMatrix,
};
use sidewinder_search::num::SpectralNumeric;

/// Lower bound of the default perturbation magnitude range.
const DEFAULT_DELTA_MIN: f64 = 0.01;

/// Upper bound of the default perturbation magnitude range.
const DEFAULT_DELTA_MAX: f64 = 0.05;

/// An operator that moves mass between two randomly chosen cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassShiftOperator<T> {
    delta_min: T,
    delta_max: T,
}

impl<T> MassShiftOperator<T>
where
    T: SpectralNumeric,
{
    /// Creates a new `MassShiftOperator` with the given magnitude range.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not finite, `delta_min` is not strictly
    /// positive, or `delta_min > delta_max`.
    pub fn new(delta_min: T, delta_max: T) -> Self {
        assert!(
            Float::is_finite(delta_min) && Float::is_finite(delta_max),
            "called `MassShiftOperator::new` with non-finite magnitude bounds"
        );
        assert!(
            delta_min > T::zero(),
            "called `MassShiftOperator::new` with a non-positive lower magnitude bound"
        );
        assert!(
            delta_min <= delta_max,
            "called `MassShiftOperator::new` with an empty magnitude range: min > max"
        );

        Self {
            delta_min,
            delta_max,
        }
    }
}

impl<T> Default for MassShiftOperator<T>
where
    T: SpectralNumeric,
{
    /// Creates an operator with the default `[0.01, 0.05]` magnitude range.
    fn default() -> Self {
        Self::new(
            T::from_f64(DEFAULT_DELTA_MIN)
                .expect("default magnitude bounds must be representable in the scalar type"),
            T::from_f64(DEFAULT_DELTA_MAX)
                .expect("default magnitude bounds must be representable in the scalar type"),
        )
    }
}

impl<T> PerturbationOperator<T> for MassShiftOperator<T>
where
    T: SpectralNumeric,
{
    fn name(&self) -> &str {
        "MassShiftOperator"
    }

    fn perturb<R>(&self, matrix: &DensityMatrix<T>, rng: &mut R) -> DensityMatrix<T>
    where
        R: Rng,
    {
        let (rows, cols) = matrix.shape();
        let mut candidate = matrix.clone();

        // Increment and decrement cells are drawn independently and may
        // coincide.
        let inc_row = RowIndex::new(rng.random_range(0..rows));
        let inc_col = ColIndex::new(rng.random_range(0..cols));
        let dec_row = RowIndex::new(rng.random_range(0..rows));
        let dec_col = ColIndex::new(rng.random_range(0..cols));

        let delta = rng.random_range(self.delta_min..=self.delta_max);

        // The increase is unbounded above; the decrease clamps at zero.
        let increased = candidate.get(inc_row, inc_col) + delta;
        candidate.set(inc_row, inc_col, increased);

        let decreased = Float::max(candidate.get(dec_row, dec_col) - delta, T::zero());
        candidate.set(dec_row, dec_col, decreased);

        candidate
    }
}

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

//! Perturbation interface for the local search.
//!
//! An operator produces a randomly modified neighbor of a candidate matrix.
//! Operators never mutate their input — every call returns an independent
//! copy — and they must preserve the matrix invariant (finite, non-negative
//! entries). Randomness comes from an injected generator so runs can be
//! reproduced with a fixed seed without changing the algorithm structure.

use rand::Rng;
use sidewinder_model::matrix::DensityMatrix;
use sidewinder_search::num::SpectralNumeric;

pub mod mass_shift;

/// A trait for producing random neighbors of a candidate matrix.
pub trait PerturbationOperator<T>
where
    T: SpectralNumeric,
{
    /// Returns the name of the operator.
    fn name(&self) -> &str;

    /// Returns a perturbed copy of `matrix`.
    ///
    /// The input is not modified; the returned matrix satisfies the same
    /// non-negativity invariant as every `DensityMatrix`.
    fn perturb<R>(&self, matrix: &DensityMatrix<T>, rng: &mut R) -> DensityMatrix<T>
    where
        R: Rng;
}

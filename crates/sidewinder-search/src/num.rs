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

//! # Spectral Numeric Trait
//!
//! Unified scalar bounds for search and solver components. `SpectralNumeric`
//! specifies the floating-point capabilities required by the search,
//! including dense eigenvalue decomposition (`nalgebra::RealField`),
//! elementary float operations (`num_traits::Float`), conversions from
//! primitive integers, and uniform random sampling for perturbation draws.
//!
//! ## Motivation
//!
//! The search pipeline should remain generic over the real scalar type while
//! retaining predictable numeric semantics. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures
//! across the perturbation, evaluation, and driver crates.
//!
//! In practice the alias is satisfied by `f32` and `f64`; the search runs
//! on `f64`, matching the double-precision reference behavior of dense
//! eigenvalue solvers.

use nalgebra::RealField;
use num_traits::{Float, FromPrimitive};
use rand::distr::uniform::SampleUniform;

/// A trait alias for scalar types that can be used in the spectral search.
///
/// This includes floating-point types that support dense eigenvalue
/// decomposition, uniform sampling, and conversion from primitive integer
/// counts (matrix orders, trial budgets).
pub trait SpectralNumeric:
    RealField
    + Float
    + FromPrimitive
    + SampleUniform
    + Copy
    + Send
    + Sync
    + std::fmt::Debug
    + std::fmt::Display
    + std::fmt::LowerExp
{
}

impl<T> SpectralNumeric for T where
    T: RealField
        + Float
        + FromPrimitive
        + SampleUniform
        + Copy
        + Send
        + Sync
        + std::fmt::Debug
        + std::fmt::Display
        + std::fmt::LowerExp
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_spectral_numeric<T: SpectralNumeric>() {}

    #[test]
    fn test_float_types_satisfy_alias() {
        assert_spectral_numeric::<f32>();
        assert_spectral_numeric::<f64>();
    }
}

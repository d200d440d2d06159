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

//! # Sidewinder Local Search
//!
//! The inner loop of the adaptive search: random perturbation of candidate
//! matrices and the greedy nested Monte Carlo step that strings
//! perturbations together. The adaptive driver in `sidewinder-solver`
//! invokes this crate once per round with an escalating trial budget.
//!
//! ## Modules
//!
//! - `operator`: The `PerturbationOperator` trait and the `MassShiftOperator`
//!   that moves a random amount of mass between two random cells.
//! - `nmcs`: The nested Monte Carlo step — greedy hill climbing over a
//!   fixed number of perturbation trials.
//! - `result`: The outcome of one local-search round (matrix plus its
//!   score), so callers never rescore a winner.

pub mod nmcs;
pub mod operator;
pub mod result;

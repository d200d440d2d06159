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

//! # Sidewinder Spectral
//!
//! The scoring side of the search: given a candidate density matrix, build
//! its derived square matrix, compute the eigenvalue spectrum, and reduce it
//! to the scalar inequality gap the search tries to push non-negative.
//!
//! ## Modules
//!
//! - `derived`: Construction of the order-(m·n) derived matrix from an m×n
//!   candidate. This is the hot path of the whole search — it runs once per
//!   candidate per trial.
//! - `gap`: The eigenvalue gap formula combining the spectrum's fifth-power
//!   sum with the mass normalization term.
//! - `objective`: The `Objective` strategy trait consumed by the search
//!   loops, and the default `ViolationObjective` (negated gap).
//! - `error`: Evaluation failures. A non-converged eigenvalue decomposition
//!   aborts the run with the triggering matrix attached; a silent wrong
//!   score would corrupt the search.

pub mod derived;
pub mod error;
pub mod gap;
pub mod objective;

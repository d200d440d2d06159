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

//! # Sidewinder Solver
//!
//! High-level orchestration of the adaptive Monte Carlo search. The driver
//! owns the incumbent matrix and score across rounds, dispatches the nested
//! Monte Carlo step with an escalating trial budget, and tracks the
//! level/depth state machine that trades stagnation tolerance for search
//! intensity.
//!
//! ## Modules
//!
//! - `solver`: The `AmcsSolver` driver with its builder, round loop, and
//!   outcome construction.
//!
//! ## Motivation
//!
//! A single flat local search stalls in the first decent basin it finds.
//! Escalating the trial budget after repeated stagnation lets the search
//! spend little effort early and concentrate it where improvement has
//! become hard.
//!
//! See `solver` for detailed APIs and examples.

pub mod solver;

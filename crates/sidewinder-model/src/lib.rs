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

//! # Sidewinder Model
//!
//! **The Core Domain Model for the Sidewinder Spectral Search.**
//!
//! This crate defines the fundamental data structure the search operates on:
//! a rectangular matrix of non-negative reals representing a fractional
//! bipartite density pattern. It serves as the data interchange layer between
//! candidate generation (perturbation operators) and scoring (the spectral
//! objective).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`RowIndex`, `ColIndex`,
//!   `PairIndex`) to keep the three index spaces of the search apart.
//! * **`matrix`**: The `DensityMatrix` type — validated construction,
//!   checked and unchecked access, and the row-major pair flattening the
//!   derived-matrix construction relies on.
//! * **`error`**: Fail-fast validation errors for untrusted input.
//!
//! ## Design Philosophy
//!
//! 1.  **Validity by construction**: every construction path checks that all
//!     entries are finite and non-negative and that both dimensions are
//!     positive, so downstream code never re-validates.
//! 2.  **Value semantics**: candidates are independent copies; the search
//!     never aliases matrix state across operation boundaries.
//! 3.  **Fail-Fast**: contract violations panic with descriptive messages;
//!     untrusted input is rejected with a typed error.

pub mod error;
pub mod index;
pub mod matrix;

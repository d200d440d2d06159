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

//! Validation errors for matrix construction.
//!
//! The search contract assumes every matrix has positive dimensions and
//! finite, non-negative entries. Construction from untrusted input rejects
//! anything else with one of these errors instead of letting NaNs or
//! negative densities silently corrupt the spectral objective. Entry values
//! are reported as `f64` regardless of the matrix scalar type; the lossy
//! conversion is acceptable for diagnostics.

use thiserror::Error;

/// An error produced when constructing or mutating a [`crate::matrix::DensityMatrix`]
/// from invalid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// One or both matrix dimensions are zero.
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
    },

    /// The flat entry buffer does not match the requested shape.
    #[error("expected {expected} entries for a {rows}x{cols} matrix, got {actual}")]
    EntryCountMismatch {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
        /// The number of entries implied by the shape.
        expected: usize,
        /// The number of entries actually supplied.
        actual: usize,
    },

    /// An entry is negative, NaN, or infinite.
    #[error("entry at ({row}, {col}) must be finite and non-negative, got {value}")]
    InvalidEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value, converted to `f64` for reporting.
        value: f64,
    },
}

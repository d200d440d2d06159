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

//! # Sidewinder Core
//!
//! Foundational utilities for the Sidewinder spectral search ecosystem.
//! This crate consolidates small, reusable building blocks that underpin
//! the higher-level model and search crates.
//!
//! ## Modules
//!
//! - `num`: By-value saturating arithmetic traits used by the statistics
//!   counters on the search hot path, where overflow must clamp instead
//!   of trapping.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`)
//!   that keep the row, column, and flattened-pair index spaces of the
//!   density matrix from being mixed up at compile time.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod utils;

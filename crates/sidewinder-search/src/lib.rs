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

//! # Sidewinder Search
//!
//! Shared infrastructure for the adaptive Monte Carlo search: the unified
//! numeric trait alias, observational monitors, run statistics, and the
//! final outcome report. These pieces are deliberately separate from the
//! search algorithms themselves so that the local-search and driver crates
//! stay focused on control flow.
//!
//! ## Modules
//!
//! - `num`: The `SpectralNumeric` trait alias collecting the scalar bounds
//!   required across the workspace.
//! - `monitor`: Lifecycle observers for search runs (no-op, logging,
//!   composite). Monitors are observational only — they cannot terminate
//!   a run.
//! - `stats`: Saturating event counters and timing for a run.
//! - `result`: The `AmcsOutcome` transport object bundling the best matrix,
//!   its score and gap, and the run statistics.

pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;

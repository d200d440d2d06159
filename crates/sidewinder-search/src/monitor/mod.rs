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

//! # Search Monitors
//!
//! Pluggable observers for search lifecycle events. Monitors can log
//! progress and collect metrics without entangling those concerns in the
//! core search loop.
//!
//! Unlike monitor stacks in solvers with external termination criteria,
//! these monitors are strictly observational: the AMCS driver terminates
//! only when its level budget is exhausted, and no monitor can cut a run
//! short. A caller wanting bounded run time caps `max_level`, `max_depth`,
//! or the per-level trial budget instead.
//!
//! ## Submodules
//!
//! - `search_monitor`: Core trait (`AmcsMonitor<T>`) defining the
//!   lifecycle hooks.
//! - `composite`: Aggregate multiple monitors into a single composite.
//! - `log`: Console progress reporting for interactive runs.
//! - `no_op`: The silent default.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod search_monitor;

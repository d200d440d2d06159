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

//! Monitoring interface for adaptive search runs.
//!
//! This module defines callbacks for observing the lifecycle of the AMCS
//! driver: start and end of a run, per-round updates with the current
//! level/depth position, incumbent improvements, and level escalations.
//! Implementations can stream logs or collect metrics. Monitors carry no
//! termination authority; the driver always runs its level budget to
//! exhaustion.

use crate::{num::SpectralNumeric, stats::AmcsStatistics};
use sidewinder_model::matrix::DensityMatrix;

/// A monitor for adaptive Monte Carlo search runs.
pub trait AmcsMonitor<T>
where
    T: SpectralNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the first round, after the initial matrix has
    /// been scored.
    fn on_start(&mut self, initial: &DensityMatrix<T>, initial_score: T);

    /// Called after each local-search round, before the accept/stagnate
    /// decision is applied.
    fn on_round(&mut self, level: u32, depth: u32, best_score: T, statistics: &AmcsStatistics);

    /// Called when a round improves the incumbent.
    fn on_new_best(&mut self, best: &DensityMatrix<T>, best_score: T, statistics: &AmcsStatistics);

    /// Called when the driver escalates to a new level.
    fn on_level_up(&mut self, level: u32, statistics: &AmcsStatistics);

    /// Called once after the level budget is exhausted.
    fn on_end(&mut self, best: &DensityMatrix<T>, best_score: T, statistics: &AmcsStatistics);
}

impl<T> std::fmt::Debug for dyn AmcsMonitor<T>
where
    T: SpectralNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AmcsMonitor {{ name: {} }}", self.name())
    }
}

impl<T> std::fmt::Display for dyn AmcsMonitor<T>
where
    T: SpectralNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AmcsMonitor: {}", self.name())
    }
}

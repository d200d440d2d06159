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

use crate::{monitor::search_monitor::AmcsMonitor, num::SpectralNumeric, stats::AmcsStatistics};
use sidewinder_model::matrix::DensityMatrix;

/// A monitor that observes nothing.
///
/// The default choice for batch runs and tests where progress output is
/// unwanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    /// Creates a new `NoOpMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> AmcsMonitor<T> for NoOpMonitor
where
    T: SpectralNumeric,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_start(&mut self, _initial: &DensityMatrix<T>, _initial_score: T) {}

    fn on_round(&mut self, _level: u32, _depth: u32, _best_score: T, _stats: &AmcsStatistics) {}

    fn on_new_best(&mut self, _best: &DensityMatrix<T>, _best_score: T, _stats: &AmcsStatistics) {}

    fn on_level_up(&mut self, _level: u32, _stats: &AmcsStatistics) {}

    fn on_end(&mut self, _best: &DensityMatrix<T>, _best_score: T, _stats: &AmcsStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hooks_are_noops() {
        let mut monitor = NoOpMonitor::new();
        let matrix = DensityMatrix::filled(2, 2, 1.0).unwrap();
        let stats = AmcsStatistics::default();

        AmcsMonitor::<f64>::name(&monitor);
        monitor.on_start(&matrix, 0.0);
        monitor.on_round(1, 0, 0.0, &stats);
        monitor.on_new_best(&matrix, 1.0, &stats);
        AmcsMonitor::<f64>::on_level_up(&mut monitor, 2, &stats);
        monitor.on_end(&matrix, 1.0, &stats);
    }

    #[test]
    fn test_name() {
        let monitor = NoOpMonitor::default();
        assert_eq!(AmcsMonitor::<f64>::name(&monitor), "NoOpMonitor");
    }
}

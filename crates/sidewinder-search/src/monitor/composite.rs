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

//! Aggregation of multiple monitors into one.
//!
//! A `CompositeMonitor` owns a list of boxed monitors and forwards every
//! lifecycle event to each of them in insertion order. This lets callers
//! combine orthogonal concerns (console logging, metric collection) without
//! the driver knowing about more than one monitor.

use crate::{monitor::search_monitor::AmcsMonitor, num::SpectralNumeric, stats::AmcsStatistics};
use sidewinder_model::matrix::DensityMatrix;

/// A monitor that forwards every event to a list of child monitors.
pub struct CompositeMonitor<T> {
    monitors: Vec<Box<dyn AmcsMonitor<T>>>,
}

impl<T> Default for CompositeMonitor<T>
where
    T: SpectralNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CompositeMonitor<T>
where
    T: SpectralNumeric,
{
    /// Creates a new, empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a monitor to the composite.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: AmcsMonitor<T> + 'static,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Returns the number of child monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<T> std::fmt::Debug for CompositeMonitor<T>
where
    T: SpectralNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor({} monitors)", self.monitors.len())
    }
}

impl<T> AmcsMonitor<T> for CompositeMonitor<T>
where
    T: SpectralNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_start(&mut self, initial: &DensityMatrix<T>, initial_score: T) {
        for monitor in &mut self.monitors {
            monitor.on_start(initial, initial_score);
        }
    }

    fn on_round(&mut self, level: u32, depth: u32, best_score: T, stats: &AmcsStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_round(level, depth, best_score, stats);
        }
    }

    fn on_new_best(&mut self, best: &DensityMatrix<T>, best_score: T, stats: &AmcsStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_new_best(best, best_score, stats);
        }
    }

    fn on_level_up(&mut self, level: u32, stats: &AmcsStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_level_up(level, stats);
        }
    }

    fn on_end(&mut self, best: &DensityMatrix<T>, best_score: T, stats: &AmcsStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_end(best, best_score, stats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counts events for assertion purposes.
    struct CountingMonitor {
        events: Rc<RefCell<Vec<&'static str>>>,
    }

    impl AmcsMonitor<f64> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_start(&mut self, _initial: &DensityMatrix<f64>, _score: f64) {
            self.events.borrow_mut().push("start");
        }

        fn on_round(&mut self, _level: u32, _depth: u32, _score: f64, _stats: &AmcsStatistics) {
            self.events.borrow_mut().push("round");
        }

        fn on_new_best(&mut self, _best: &DensityMatrix<f64>, _score: f64, _stats: &AmcsStatistics) {
            self.events.borrow_mut().push("best");
        }

        fn on_level_up(&mut self, _level: u32, _stats: &AmcsStatistics) {
            self.events.borrow_mut().push("level");
        }

        fn on_end(&mut self, _best: &DensityMatrix<f64>, _score: f64, _stats: &AmcsStatistics) {
            self.events.borrow_mut().push("end");
        }
    }

    #[test]
    fn test_empty_composite_is_safe() {
        let mut composite = CompositeMonitor::<f64>::new();
        assert!(composite.is_empty());

        let matrix = DensityMatrix::filled(2, 2, 1.0).unwrap();
        let stats = AmcsStatistics::default();
        composite.on_start(&matrix, 0.0);
        composite.on_end(&matrix, 0.0, &stats);
    }

    #[test]
    fn test_events_fan_out_to_all_children() {
        let events_a = Rc::new(RefCell::new(Vec::new()));
        let events_b = Rc::new(RefCell::new(Vec::new()));

        let mut composite = CompositeMonitor::<f64>::new();
        composite.add_monitor(CountingMonitor {
            events: Rc::clone(&events_a),
        });
        composite.add_monitor(CountingMonitor {
            events: Rc::clone(&events_b),
        });
        assert_eq!(composite.len(), 2);

        let matrix = DensityMatrix::filled(2, 2, 1.0).unwrap();
        let stats = AmcsStatistics::default();
        composite.on_start(&matrix, 0.0);
        composite.on_round(1, 0, 0.0, &stats);
        composite.on_new_best(&matrix, 1.0, &stats);
        composite.on_level_up(2, &stats);
        composite.on_end(&matrix, 1.0, &stats);

        let expected = vec!["start", "round", "best", "level", "end"];
        assert_eq!(*events_a.borrow(), expected);
        assert_eq!(*events_b.borrow(), expected);
    }
}

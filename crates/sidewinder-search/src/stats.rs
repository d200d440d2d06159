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

//! Statistics reporting for adaptive search runs.
//!
//! This module defines a lightweight container for tracking aggregate
//! metrics during an AMCS run: objective evaluations, local-search trial
//! improvements, driver rounds, rounds that improved the incumbent, level
//! escalations, and total elapsed time. The interface is optimized for
//! hot-loop usage: updates rely on saturating arithmetic to avoid overflow
//! traps and expose inline methods for per-event accounting. The resulting
//! `AmcsStatistics` can be consumed by monitors and result reporting to
//! provide visibility into search progress without imposing measurable
//! overhead on the inner loop.

use sidewinder_core::num::ops::saturating_arithmetic::{SaturatingAddVal, SaturatingSubVal};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmcsStatistics {
    /// Number of objective evaluations performed, including the scoring of
    /// each round's starting matrix.
    pub evaluations: u64,

    /// Number of perturbation trials that improved the local-search best.
    pub trial_improvements: u64,

    /// Number of local-search rounds dispatched by the driver.
    pub rounds: u64,

    /// Number of rounds whose result improved the incumbent score.
    pub improved_rounds: u64,

    /// Number of level escalations performed by the driver.
    pub level_escalations: u64,

    /// Total wall-clock time of the run.
    pub time_total: Duration,
}

impl Default for AmcsStatistics {
    fn default() -> Self {
        Self {
            evaluations: 0,
            trial_improvements: 0,
            rounds: 0,
            improved_rounds: 0,
            level_escalations: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl AmcsStatistics {
    /// Called for each objective evaluation.
    #[inline]
    pub fn on_evaluation(&mut self) {
        self.evaluations = self.evaluations.saturating_add_val(1);
    }

    /// Called when a perturbation trial beats the local-search best.
    #[inline]
    pub fn on_trial_improvement(&mut self) {
        self.trial_improvements = self.trial_improvements.saturating_add_val(1);
    }

    /// Called at the start of each driver round.
    #[inline]
    pub fn on_round(&mut self) {
        self.rounds = self.rounds.saturating_add_val(1);
    }

    /// Called when a round improves the incumbent score.
    #[inline]
    pub fn on_improved_round(&mut self) {
        self.improved_rounds = self.improved_rounds.saturating_add_val(1);
    }

    /// Called when the driver escalates the search level.
    #[inline]
    pub fn on_level_escalation(&mut self) {
        self.level_escalations = self.level_escalations.saturating_add_val(1);
    }

    /// Sets the total wall-clock time of the run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Number of rounds that failed to improve the incumbent.
    #[inline]
    pub fn stagnant_rounds(&self) -> u64 {
        self.rounds.saturating_sub_val(self.improved_rounds)
    }
}

impl std::fmt::Display for AmcsStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AMCS Statistics:")?;
        writeln!(f, "   Evaluations:         {}", self.evaluations)?;
        writeln!(f, "   Trial Improvements:  {}", self.trial_improvements)?;
        writeln!(f, "   Rounds:              {}", self.rounds)?;
        writeln!(f, "   Improved Rounds:     {}", self.improved_rounds)?;
        writeln!(f, "   Stagnant Rounds:     {}", self.stagnant_rounds())?;
        writeln!(f, "   Level Escalations:   {}", self.level_escalations)?;
        writeln!(f, "   Total Time:          {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let stats = AmcsStatistics::default();
        assert_eq!(stats.evaluations, 0);
        assert_eq!(stats.trial_improvements, 0);
        assert_eq!(stats.rounds, 0);
        assert_eq!(stats.improved_rounds, 0);
        assert_eq!(stats.level_escalations, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = AmcsStatistics::default();
        stats.on_evaluation();
        stats.on_evaluation();
        stats.on_trial_improvement();
        stats.on_round();
        stats.on_round();
        stats.on_round();
        stats.on_improved_round();
        stats.on_level_escalation();

        assert_eq!(stats.evaluations, 2);
        assert_eq!(stats.trial_improvements, 1);
        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.improved_rounds, 1);
        assert_eq!(stats.stagnant_rounds(), 2);
        assert_eq!(stats.level_escalations, 1);
    }

    #[test]
    fn test_stagnant_rounds_saturates() {
        let mut stats = AmcsStatistics::default();
        stats.on_improved_round();
        // More improvements than rounds cannot underflow.
        assert_eq!(stats.stagnant_rounds(), 0);
    }

    #[test]
    fn test_set_total_time() {
        let mut stats = AmcsStatistics::default();
        stats.set_total_time(Duration::from_millis(1500));
        assert_eq!(stats.time_total, Duration::from_millis(1500));
    }
}

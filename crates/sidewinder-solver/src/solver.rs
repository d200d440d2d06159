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

//! # Adaptive Monte Carlo Search Driver
//!
//! The driver runs the nested Monte Carlo step repeatedly, owning the
//! incumbent matrix and score between rounds. Its state machine is a pair
//! of counters:
//!
//! - **depth** counts consecutive rounds without improvement at the current
//!   level; when it exceeds the stagnation tolerance, the level escalates.
//! - **level** scales the per-round trial budget (`trials_per_level ×
//!   level`) and bounds the run: the search terminates exactly when the
//!   level exceeds its budget.
//!
//! An improving round resets depth but never the level. There is no early
//! exit on a successful violation — a run always exhausts its level budget
//! and keeps looking for a stronger counterexample. Monitors observe every
//! round but cannot terminate the run; callers bound wall-clock time by
//! choosing `max_depth`, `max_level`, and `trials_per_level`, which caps
//! the run at `max_level × (max_depth + 1)` rounds plus the per-round trial
//! budgets.
//!
//! ## Usage
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sidewinder_ls::operator::mass_shift::MassShiftOperator;
//! use sidewinder_model::matrix::DensityMatrix;
//! use sidewinder_search::monitor::no_op::NoOpMonitor;
//! use sidewinder_solver::solver::AmcsSolver;
//! use sidewinder_spectral::objective::ViolationObjective;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let initial = DensityMatrix::<f64>::random(2, 2, &mut rng).unwrap();
//!
//! let solver = AmcsSolver::builder()
//!     .with_max_depth(1)
//!     .with_max_level(1)
//!     .with_trials_per_level(5)
//!     .build();
//!
//! let outcome = solver
//!     .solve(
//!         &initial,
//!         &ViolationObjective::new(),
//!         &MassShiftOperator::default(),
//!         &mut rng,
//!         &mut NoOpMonitor::new(),
//!     )
//!     .unwrap();
//! assert_eq!(outcome.matrix().shape(), (2, 2));
//! ```

use rand::Rng;
use sidewinder_ls::{nmcs::NestedMonteCarlo, operator::PerturbationOperator};
use sidewinder_model::matrix::DensityMatrix;
use sidewinder_search::{
    monitor::search_monitor::AmcsMonitor, num::SpectralNumeric, result::AmcsOutcome,
    stats::AmcsStatistics,
};
use sidewinder_spectral::{error::SpectralError, objective::Objective};
use std::time::Instant;

/// Default stagnation tolerance per level.
const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default number of escalation levels.
const DEFAULT_MAX_LEVEL: u32 = 3;

/// Default trial budget multiplier per level.
const DEFAULT_TRIALS_PER_LEVEL: usize = 20;

/// The adaptive Monte Carlo search driver.
///
/// Configuration is immutable after construction; one solver value can run
/// any number of searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmcsSolver {
    max_depth: u32,
    max_level: u32,
    trials_per_level: usize,
}

impl AmcsSolver {
    /// Returns a builder with default configuration.
    #[inline]
    pub fn builder() -> AmcsSolverBuilder {
        AmcsSolverBuilder::new()
    }

    /// Returns the stagnation tolerance per level.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Returns the number of escalation levels.
    #[inline]
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Returns the trial budget multiplier per level.
    #[inline]
    pub fn trials_per_level(&self) -> usize {
        self.trials_per_level
    }

    /// Runs the adaptive search from `initial` until the level budget is
    /// exhausted.
    ///
    /// The returned outcome carries the best matrix, its violation score,
    /// the corresponding gap, and run statistics. The incumbent score is
    /// non-decreasing over the run.
    ///
    /// # Errors
    ///
    /// Propagates the first evaluation failure. The search loop itself
    /// cannot fail.
    pub fn solve<T, O, P, R, M>(
        &self,
        initial: &DensityMatrix<T>,
        objective: &O,
        operator: &P,
        rng: &mut R,
        monitor: &mut M,
    ) -> Result<AmcsOutcome<T>, SpectralError<T>>
    where
        T: SpectralNumeric,
        O: Objective<T>,
        P: PerturbationOperator<T>,
        R: Rng,
        M: AmcsMonitor<T>,
    {
        let start_time = Instant::now();
        let mut statistics = AmcsStatistics::default();
        let local_search = NestedMonteCarlo::new();

        let mut current = initial.clone();
        statistics.on_evaluation();
        let mut current_score = objective.evaluate(&current)?;

        monitor.on_start(&current, current_score);

        let mut depth: u32 = 0;
        let mut level: u32 = 1;

        while level <= self.max_level {
            let trial_budget = self.trials_per_level * level as usize;

            statistics.on_round();
            let round = local_search.run(
                &current,
                trial_budget,
                objective,
                operator,
                rng,
                &mut statistics,
            )?;

            monitor.on_round(level, depth, current_score, &statistics);

            if round.score() > current_score {
                let (matrix, score) = round.into_parts();
                current = matrix;
                current_score = score;
                depth = 0;
                statistics.on_improved_round();
                monitor.on_new_best(&current, current_score, &statistics);
            } else if depth < self.max_depth {
                depth += 1;
            } else {
                depth = 0;
                level += 1;
                statistics.on_level_escalation();
                if level <= self.max_level {
                    monitor.on_level_up(level, &statistics);
                }
            }
        }

        statistics.set_total_time(start_time.elapsed());
        monitor.on_end(&current, current_score, &statistics);

        let gap = -current_score;
        Ok(AmcsOutcome::new(current, current_score, gap, statistics))
    }
}

impl Default for AmcsSolver {
    #[inline]
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`AmcsSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmcsSolverBuilder {
    max_depth: u32,
    max_level: u32,
    trials_per_level: usize,
}

impl Default for AmcsSolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl AmcsSolverBuilder {
    /// Creates a builder with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_level: DEFAULT_MAX_LEVEL,
            trials_per_level: DEFAULT_TRIALS_PER_LEVEL,
        }
    }

    /// Sets the stagnation tolerance per level. A tolerance of zero
    /// escalates after every non-improving round.
    #[inline]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the number of escalation levels.
    #[inline]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Sets the trial budget multiplier per level.
    #[inline]
    pub fn with_trials_per_level(mut self, trials_per_level: usize) -> Self {
        self.trials_per_level = trials_per_level;
        self
    }

    /// Builds the solver.
    ///
    /// # Panics
    ///
    /// Panics if `max_level` or `trials_per_level` is zero.
    pub fn build(self) -> AmcsSolver {
        assert!(
            self.max_level >= 1,
            "called `AmcsSolverBuilder::build` with max_level = 0; at least one level is required"
        );
        assert!(
            self.trials_per_level >= 1,
            "called `AmcsSolverBuilder::build` with trials_per_level = 0; rounds would be no-ops"
        );

        AmcsSolver {
            max_depth: self.max_depth,
            max_level: self.max_level,
            trials_per_level: self.trials_per_level,
        }
    }
}

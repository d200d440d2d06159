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

//! The nested Monte Carlo step.
//!
//! One round of local search: score the starting matrix, then run a fixed
//! number of perturb-and-evaluate trials, greedily keeping the best matrix
//! found. Each trial perturbs the running best — not the round's starting
//! point — so an accepted improvement becomes the new perturbation base
//! immediately. A strictly greater score is required to accept; ties keep
//! the incumbent. The round never returns a matrix scoring below its
//! starting point.

use crate::{operator::PerturbationOperator, result::NestedSearchOutcome};
use rand::Rng;
use sidewinder_model::matrix::DensityMatrix;
use sidewinder_search::{num::SpectralNumeric, stats::AmcsStatistics};
use sidewinder_spectral::{error::SpectralError, objective::Objective};

/// The greedy hill-climbing step invoked once per driver round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NestedMonteCarlo;

impl NestedMonteCarlo {
    /// Creates a new `NestedMonteCarlo` step.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs `steps` perturbation trials from `initial` and returns the best
    /// matrix found together with its score.
    ///
    /// With `steps = 0` the initial matrix is returned unchanged (scored
    /// once). Every objective evaluation is counted on `statistics`.
    ///
    /// # Errors
    ///
    /// Propagates the first evaluation failure; the partially completed
    /// round is discarded.
    pub fn run<T, O, P, R>(
        &self,
        initial: &DensityMatrix<T>,
        steps: usize,
        objective: &O,
        operator: &P,
        rng: &mut R,
        statistics: &mut AmcsStatistics,
    ) -> Result<NestedSearchOutcome<T>, SpectralError<T>>
    where
        T: SpectralNumeric,
        O: Objective<T>,
        P: PerturbationOperator<T>,
        R: Rng,
    {
        let mut best_matrix = initial.clone();
        statistics.on_evaluation();
        let mut best_score = objective.evaluate(&best_matrix)?;

        for _ in 0..steps {
            let candidate = operator.perturb(&best_matrix, rng);
            statistics.on_evaluation();
            let candidate_score = objective.evaluate(&candidate)?;

            if candidate_score > best_score {
                best_matrix = candidate;
                best_score = candidate_score;
                statistics.on_trial_improvement();
            }
        }

        Ok(NestedSearchOutcome::new(best_matrix, best_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::mass_shift::MassShiftOperator;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use sidewinder_spectral::objective::ViolationObjective;

    /// Scores a matrix by its total mass; cheap and strictly monotone in
    /// the clamp-free mass shifts, which makes greedy behavior observable.
    #[derive(Debug, Clone, Copy)]
    struct MassObjective;

    impl Objective<f64> for MassObjective {
        fn name(&self) -> &str {
            "MassObjective"
        }

        fn evaluate(&self, matrix: &DensityMatrix<f64>) -> Result<f64, SpectralError<f64>> {
            Ok(matrix.total())
        }
    }

    /// Fails on every evaluation.
    #[derive(Debug, Clone, Copy)]
    struct FailingObjective;

    impl Objective<f64> for FailingObjective {
        fn name(&self) -> &str {
            "FailingObjective"
        }

        fn evaluate(&self, matrix: &DensityMatrix<f64>) -> Result<f64, SpectralError<f64>> {
            Err(SpectralError::EigenvalueNonConvergence {
                rows: matrix.rows(),
                cols: matrix.cols(),
                order: matrix.order(),
                matrix: matrix.clone(),
            })
        }
    }

    #[test]
    fn test_zero_steps_returns_initial() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut stats = AmcsStatistics::default();
        let initial = DensityMatrix::filled(3, 3, 0.5).unwrap();

        let outcome = NestedMonteCarlo::new()
            .run(
                &initial,
                0,
                &MassObjective,
                &MassShiftOperator::default(),
                &mut rng,
                &mut stats,
            )
            .unwrap();

        assert_eq!(outcome.matrix(), &initial);
        assert_eq!(outcome.score(), initial.total());
        assert_eq!(stats.evaluations, 1);
        assert_eq!(stats.trial_improvements, 0);
    }

    #[test]
    fn test_score_never_regresses() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut stats = AmcsStatistics::default();
        let initial = DensityMatrix::filled(3, 3, 0.02).unwrap();
        let objective = MassObjective;

        let initial_score = objective.evaluate(&initial).unwrap();
        let outcome = NestedMonteCarlo::new()
            .run(
                &initial,
                50,
                &objective,
                &MassShiftOperator::default(),
                &mut rng,
                &mut stats,
            )
            .unwrap();

        assert!(outcome.score() >= initial_score);
        assert_eq!(stats.evaluations, 51);
    }

    #[test]
    fn test_greedy_restarts_from_running_best() {
        // Near zero, decrements clamp and increments stick, so the total
        // grows across accepted trials. Growth beyond a single delta is
        // only possible if later trials perturb earlier winners.
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut stats = AmcsStatistics::default();
        let initial = DensityMatrix::filled(2, 2, 0.0).unwrap();

        let outcome = NestedMonteCarlo::new()
            .run(
                &initial,
                100,
                &MassObjective,
                &MassShiftOperator::default(),
                &mut rng,
                &mut stats,
            )
            .unwrap();

        assert!(
            outcome.score() > 0.05,
            "accumulated mass {} should exceed a single maximal delta",
            outcome.score()
        );
        assert!(stats.trial_improvements > 1);
    }

    #[test]
    fn test_spectral_objective_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut stats = AmcsStatistics::default();
        let initial = DensityMatrix::random(2, 2, &mut rng).unwrap();
        let objective = ViolationObjective::new();

        let initial_score: f64 = objective.evaluate(&initial).unwrap();
        let outcome = NestedMonteCarlo::new()
            .run(
                &initial,
                10,
                &objective,
                &MassShiftOperator::default(),
                &mut rng,
                &mut stats,
            )
            .unwrap();

        assert!(outcome.score() >= initial_score);
        assert_eq!(outcome.matrix().shape(), initial.shape());
    }

    #[test]
    fn test_evaluation_errors_propagate() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut stats = AmcsStatistics::default();
        let initial = DensityMatrix::filled(2, 2, 0.5).unwrap();

        let result = NestedMonteCarlo::new().run(
            &initial,
            10,
            &FailingObjective,
            &MassShiftOperator::default(),
            &mut rng,
            &mut stats,
        );

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().matrix(), &initial);
    }
}

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

//! Command-line entry point for the Sidewinder spectral search.
//!
//! Seeds a random non-negative matrix, runs the adaptive Monte Carlo
//! search with a console monitor, and reports the final matrix, gap, and
//! wall-clock time. All search behavior lives in the library crates; this
//! binary only wires configuration together.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sidewinder_ls::operator::mass_shift::MassShiftOperator;
use sidewinder_model::matrix::DensityMatrix;
use sidewinder_search::monitor::log::LogMonitor;
use sidewinder_solver::solver::AmcsSolver;
use sidewinder_spectral::objective::ViolationObjective;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "sidewinder",
    version,
    about = "Adaptive Monte Carlo search for spectral-inequality violations"
)]
struct Args {
    /// Number of rows of the density matrix.
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns of the density matrix.
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Consecutive non-improving rounds tolerated before escalating.
    #[arg(long, default_value_t = 10)]
    max_depth: u32,

    /// Number of escalation levels to exhaust.
    #[arg(long, default_value_t = 5)]
    max_level: u32,

    /// Perturbation trials per level unit (budget = trials × level).
    #[arg(long, default_value_t = 20)]
    trials_per_level: usize,

    /// Seed for the random generator; derived from the OS if omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let initial = match DensityMatrix::<f64>::random(args.rows, args.cols, &mut rng) {
        Ok(matrix) => matrix,
        Err(error) => {
            eprintln!("invalid matrix configuration: {}", error);
            std::process::exit(1);
        }
    };

    println!(
        "--- Searching for spectral-inequality violations on {}x{} matrices ---",
        args.rows, args.cols
    );
    println!("Initial matrix:");
    print!("{}", initial);

    let solver = AmcsSolver::builder()
        .with_max_depth(args.max_depth)
        .with_max_level(args.max_level)
        .with_trials_per_level(args.trials_per_level)
        .build();

    let objective = ViolationObjective::new();
    let operator = MassShiftOperator::<f64>::default();
    let mut monitor = LogMonitor::new();

    let start_time = Instant::now();
    match solver.solve(&initial, &objective, &operator, &mut rng, &mut monitor) {
        Ok(_outcome) => {
            println!();
            println!(
                "Total search time: {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(error) => {
            eprintln!("search aborted: {}", error);
            eprintln!("offending matrix:");
            eprint!("{}", error.matrix());
            std::process::exit(1);
        }
    }
}

//! # The two phase dictionary simplex method
//!
//! This module contains all data structures and logic specific to the simplex algorithm. When the
//! initial dictionary is not feasible, a feasible one is first computed by solving an auxiliary
//! problem (phase one). The actual objective is then optimized starting from that dictionary
//! (phase two).
use std::mem;

use log::{debug, info};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::observer::{Event, Observer, Observers, Stage};
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::phase_two::Objective;
use crate::algorithm::two_phase::solver::{Configuration, Solver, Statistics, StepError};

pub mod dictionary;
pub mod observer;
pub mod phase_one;
pub mod phase_two;
pub mod solver;
pub mod strategy;

/// Solves dictionaries from start to end, possibly going through both phases.
///
/// Observers and statistics are kept across calls to `solve`.
#[derive(Debug, Default)]
pub struct TwoPhase {
    configuration: Configuration,
    observers: Observers,
    statistics: Statistics,
}

/// Final state of a solve.
#[derive(Debug)]
pub struct Outcome {
    /// Whether an optimum was found.
    pub result: OptimizationResult,
    /// The last dictionary: optimal or unbounded in phase two, or the final auxiliary dictionary
    /// if the problem is infeasible.
    pub dictionary: Dictionary,
}

impl TwoPhase {
    /// Create a driver without observers.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            observers: Observers::new(),
            statistics: Statistics::default(),
        }
    }

    /// Add an observer that will be notified during all following solves.
    pub fn register(&mut self, observer: impl Observer + 'static) {
        self.observers.register(observer);
    }

    /// Maximize the objective of a dictionary.
    ///
    /// # Arguments
    ///
    /// * `dictionary`: Any dictionary, not necessarily feasible. It should not contain the
    /// auxiliary variable.
    ///
    /// # Errors
    ///
    /// Only when the solver blocks on a zero pivot element, which indicates numerical trouble.
    pub fn solve(&mut self, dictionary: Dictionary) -> Result<Outcome, StepError> {
        info!(
            "Solving a dictionary with {} basic and {} non-basic variables",
            dictionary.nr_basic(), dictionary.nr_non_basic(),
        );
        self.observers.notify(&Event::Dictionary { stage: Stage::Initial, dictionary: &dictionary });

        let feasible = if dictionary.is_feasible() {
            debug!("Initial dictionary is feasible, skipping phase one");
            dictionary
        } else {
            info!("Initial dictionary is infeasible, starting phase one");
            let objective = Objective::of(&dictionary);

            let mut solver = self.session(phase_one::auxiliary_dictionary(&dictionary));
            solver.announce(Stage::Auxiliary);
            let result = phase_one::primal(&mut solver);
            let auxiliary = self.end_session(solver);

            match result? {
                FeasibilityResult::Infeasible => {
                    info!("Problem is infeasible");
                    return Ok(Outcome { result: OptimizationResult::Infeasible, dictionary: auxiliary });
                },
                FeasibilityResult::Feasible(rank) => {
                    info!("Feasible dictionary found, starting phase two");
                    let initial = objective.initial_dictionary(&auxiliary, rank);
                    self.observers.notify(&Event::Dictionary {
                        stage: Stage::PhaseTwo,
                        dictionary: &initial,
                    });
                    initial
                },
            }
        };

        let mut solver = self.session(feasible);
        let result = phase_two::primal(&mut solver);
        let dictionary = self.end_session(solver);
        let result = result?;

        match &result {
            OptimizationResult::FiniteOptimum(solution) => {
                info!("Optimal value {} after {}", solution.objective_value(), self.statistics);
            },
            OptimizationResult::Unbounded => info!("Problem is unbounded after {}", self.statistics),
            OptimizationResult::Infeasible => {},
        }

        Ok(Outcome { result, dictionary })
    }

    /// Lend the observers to a new solver.
    fn session(&mut self, dictionary: Dictionary) -> Solver {
        Solver::with_observers(dictionary, self.configuration, mem::take(&mut self.observers))
    }

    /// Take the observers back and collect the statistics.
    fn end_session(&mut self, solver: Solver) -> Dictionary {
        let (dictionary, statistics, observers) = solver.into_parts();
        self.observers = observers;
        self.statistics.merge(&statistics);

        dictionary
    }

    /// Counts of all solves so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Settings used for new solves.
    pub fn configuration(&self) -> Configuration {
        self.configuration
    }
}

#[cfg(test)]
mod test;

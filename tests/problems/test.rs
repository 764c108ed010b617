use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;

use simplex_dictionary::algorithm::{OptimizationResult, Solve};
use simplex_dictionary::algorithm::two_phase::observer::{Event, FnObserver};
use simplex_dictionary::algorithm::two_phase::solver::{Configuration, Selection, Solver, Status, StepOutcome, Termination};
use simplex_dictionary::algorithm::two_phase::strategy::pivot_rule::EnteringMethod;
use simplex_dictionary::algorithm::two_phase::TwoPhase;
use simplex_dictionary::io::error::ImportError;
use simplex_dictionary::io::import;

use super::{get_test_file_path, read};

#[test]
fn textbook() {
    let problem = read("textbook");

    for method in EnteringMethod::ALL {
        match problem.solve(Configuration { method, bland: true }) {
            Ok(OptimizationResult::FiniteOptimum(solution)) => {
                assert_abs_diff_eq!(solution.objective_value(), 27_f64, epsilon = 1e-9);
                assert_abs_diff_eq!(solution.value(1), 3_f64, epsilon = 1e-9);
                assert_abs_diff_eq!(solution.value(2), 5_f64, epsilon = 1e-9);
            },
            other => panic!("{:?}", other),
        }
    }
}

#[test]
fn infeasible_start() {
    let problem = read("infeasible_start");
    assert!(!problem.initial_dictionary().is_feasible());

    let pivots = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&pivots);
    let mut driver = TwoPhase::new(Configuration::default());
    driver.register(FnObserver::new(move |event| {
        if let Event::Pivot(_) = event {
            *counter.borrow_mut() += 1;
        }
    }));

    let outcome = driver.solve(problem.initial_dictionary()).unwrap();
    match outcome.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.objective_value(), 4_f64, epsilon = 1e-9);
            assert!(solution.value(1) >= 1_f64 - 1e-9);
            assert!(solution.value(2) >= 1_f64 - 1e-9);
        },
        other => panic!("{:?}", other),
    }
    assert_eq!(*pivots.borrow(), driver.statistics().total_pivots());
    assert_eq!(*pivots.borrow(), 4);
}

#[test]
fn infeasible() {
    let result = read("infeasible").solve(Configuration::default());
    assert_eq!(result, Ok(OptimizationResult::Infeasible));
}

#[test]
fn unbounded() {
    for method in EnteringMethod::ALL {
        let result = read("unbounded").solve(Configuration { method, bland: true });
        assert_eq!(result, Ok(OptimizationResult::Unbounded));
    }
}

#[test]
fn cycling() {
    let problem = read("cycling");
    let configuration = Configuration { method: EnteringMethod::Greatest, bland: false };
    let mut solver = Solver::new(problem.initial_dictionary(), configuration);

    for _ in 0..6 {
        assert!(matches!(solver.step(Selection::Auto), Ok(StepOutcome::Pivoted(_))));
    }
    // Back where it started, without any progress
    assert_eq!(solver.dictionary().basic_variables(), &[5, 6, 7]);
    assert_eq!(solver.dictionary().objective_value(), 0_f64);
    assert_eq!(solver.status(), Status::Running);

    solver.set_bland(true);
    assert_eq!(solver.run(), Ok(Termination::Optimal));
    assert_abs_diff_eq!(solver.dictionary().objective_value(), 1_f64, epsilon = 1e-9);
}

#[test]
fn missing_file() {
    let result = import(&get_test_file_path("does_not_exist"));
    assert!(matches!(result, Err(ImportError::IO(_))));
}

#[test]
fn malformed() {
    match import(&get_test_file_path("malformed")) {
        Err(ImportError::Parse(error)) => {
            assert_eq!(error.description(), "Invalid constraint 2");
            assert_eq!(error.line_number(), Some(3));
        },
        other => panic!("{:?}", other),
    }
}

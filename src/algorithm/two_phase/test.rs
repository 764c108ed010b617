use approx::assert_abs_diff_eq;

use crate::algorithm::{OptimizationResult, Solve};
use crate::algorithm::two_phase::{Outcome, TwoPhase};
use crate::algorithm::two_phase::observer::Stage;
use crate::algorithm::two_phase::observer::test::{Recorded, Recorder};
use crate::algorithm::two_phase::solver::{Configuration, PivotOrigin};
use crate::algorithm::two_phase::strategy::pivot_rule::EnteringMethod;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::StandardForm;
use crate::io::dictionary_format::parse;
use crate::tests::{problem_1, problem_2, problem_3, problem_4};

fn configuration(method: EnteringMethod) -> Configuration {
    Configuration { method, bland: true }
}

fn solve(problem: &StandardForm, configuration: Configuration) -> (Outcome, TwoPhase) {
    let mut driver = TwoPhase::new(configuration);
    let outcome = driver.solve(problem.initial_dictionary()).unwrap();
    (outcome, driver)
}

fn optimum(result: OptimizationResult) -> Solution {
    match result {
        OptimizationResult::FiniteOptimum(solution) => solution,
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn feasible_start() {
    for method in EnteringMethod::ALL {
        let (outcome, driver) = solve(&problem_1::standard_form(), configuration(method));
        let solution = optimum(outcome.result);

        assert_abs_diff_eq!(solution.objective_value(), 27_f64, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.value(1), 3_f64, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.value(2), 5_f64, epsilon = 1e-12);
        assert!(outcome.dictionary.is_optimal());
        assert_eq!(driver.statistics().pivots(PivotOrigin::Feasibility), 0);
        assert_eq!(driver.statistics().pivots(PivotOrigin::EnteringRule), 2);
    }
}

#[test]
fn infeasible_start() {
    for method in EnteringMethod::ALL {
        let (outcome, driver) = solve(&problem_2::standard_form(), configuration(method));
        let solution = optimum(outcome.result);

        assert_abs_diff_eq!(solution.objective_value(), 4_f64, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.value(1), 1_f64, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.value(2), 3_f64, epsilon = 1e-12);
        assert_eq!(outcome.dictionary.basic_variables(), &[5, 2, 1]);
        assert!(!outcome.dictionary.contains(0));

        let statistics = driver.statistics();
        assert_eq!(statistics.pivots(PivotOrigin::Feasibility), 1);
        assert_eq!(statistics.pivots(PivotOrigin::Bland), 1);
        assert_eq!(statistics.pivots(PivotOrigin::EnteringRule), 2);
        assert_eq!(statistics.pivots(PivotOrigin::Caller), 0);
    }
}

#[test]
fn infeasible() {
    for method in EnteringMethod::ALL {
        let (outcome, _) = solve(&problem_4::standard_form(), configuration(method));

        assert_eq!(outcome.result, OptimizationResult::Infeasible);
        assert!(outcome.dictionary.is_basic(0));
        assert_abs_diff_eq!(outcome.dictionary.objective_value(), -1_f64);
    }
}

#[test]
fn unbounded() {
    // x1 - x2 <= 1
    let problem = parse("2 1\n1 -1 1\n1 1\n").unwrap();

    for method in EnteringMethod::ALL {
        let (outcome, _) = solve(&problem, configuration(method));
        assert_eq!(outcome.result, OptimizationResult::Unbounded);
    }

    // The most advantageous rule sees the unbounded column before pivoting
    let (_, driver) = solve(&problem, configuration(EnteringMethod::MostAdvantageous));
    assert_eq!(driver.statistics().total_pivots(), 0);
    let (_, driver) = solve(&problem, configuration(EnteringMethod::First));
    assert_eq!(driver.statistics().total_pivots(), 1);
}

#[test]
fn auxiliary_variable_basic_at_zero_level() {
    // x1 + x2 = 2, written as two inequalities
    let problem = parse("2 2\n1 1 2\n-1 -1 -2\n1 0\n").unwrap();

    for method in EnteringMethod::ALL {
        let (outcome, driver) = solve(&problem, configuration(method));
        let solution = optimum(outcome.result);

        assert_abs_diff_eq!(solution.objective_value(), 2_f64, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.value(1), 2_f64, epsilon = 1e-12);
        assert_eq!(driver.statistics().pivots(PivotOrigin::Feasibility), 2);
    }
}

#[test]
fn phases_agree() {
    // Adding the redundant constraint x1 + x2 >= 1 makes the slack basis infeasible
    let direct = problem_1::standard_form();
    let through_phase_one = parse("2 4\n2 3 24\n5 3 30\n1 3 18\n-1 -1 -1\n4 3\n").unwrap();

    let (direct, _) = solve(&direct, Configuration::default());
    let (two_phase, driver) = solve(&through_phase_one, Configuration::default());

    assert_eq!(driver.statistics().pivots(PivotOrigin::Feasibility), 1);
    assert_abs_diff_eq!(
        optimum(direct.result).objective_value(),
        optimum(two_phase.result).objective_value(),
        epsilon = 1e-9,
    );
}

#[test]
fn events() {
    let recorder = Recorder::default();
    let mut driver = TwoPhase::new(Configuration::default());
    driver.register(recorder.clone());

    driver.solve(problem_2::dictionary()).unwrap();

    assert_eq!(recorder.events(), vec![
        Recorded::Dictionary(Stage::Initial, 0_f64),
        Recorded::Dictionary(Stage::Auxiliary, 0_f64),
        Recorded::Pivot { entering: 0, leaving: 4 },
        Recorded::Dictionary(Stage::Pivoted, -1_f64),
        Recorded::Pivot { entering: 1, leaving: 5 },
        Recorded::Dictionary(Stage::Pivoted, -1_f64),
        Recorded::Pivot { entering: 2, leaving: 0 },
        Recorded::Dictionary(Stage::Pivoted, 0_f64),
        Recorded::Dictionary(Stage::PhaseTwo, 2_f64),
        Recorded::Pivot { entering: 5, leaving: 3 },
        Recorded::Dictionary(Stage::Pivoted, 4_f64),
    ]);
}

#[test]
fn observers_and_statistics_are_kept() {
    let recorder = Recorder::default();
    let mut driver = TwoPhase::new(Configuration::default());
    driver.register(recorder.clone());

    driver.solve(problem_1::dictionary()).unwrap();
    let first = recorder.events().len();
    driver.solve(problem_1::dictionary()).unwrap();

    assert_eq!(recorder.events().len(), 2 * first);
    assert_eq!(driver.statistics().pivots(PivotOrigin::EnteringRule), 4);
    assert_eq!(driver.statistics().steps(), 6);
    assert_eq!(driver.configuration(), Configuration::default());
}

#[test]
fn no_cycling() {
    for method in EnteringMethod::ALL {
        let (outcome, driver) = solve(&parse(problem_3::PROBLEM_LITERAL_STRING).unwrap(), configuration(method));
        let solution = optimum(outcome.result);

        assert_abs_diff_eq!(solution.objective_value(), 1_f64, epsilon = 1e-12);
        assert_eq!(driver.statistics().pivots(PivotOrigin::Bland), 6);
    }
}

#[test]
fn standard_form() {
    let result = problem_1::standard_form().solve(Configuration::default());
    assert_abs_diff_eq!(optimum(result.unwrap()).objective_value(), 27_f64, epsilon = 1e-12);

    let result = problem_4::standard_form().solve(Configuration::default());
    assert_eq!(result, Ok(OptimizationResult::Infeasible));
}

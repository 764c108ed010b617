//! # Simplex iterations
//!
//! A `Solver` owns a dictionary and moves it from basis to basis, one step at a time. Each step
//! selects an entering column and a leaving row using the configured rules and pivots on them.
//!
//! Bland's rule is not used all the time. Only when a step would be degenerate (the entering
//! variable can't increase) and Bland's rule is enabled, the selection is redone with the smallest
//! variable number rules. That is enough to prevent cycling.
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::{Enum, EnumMap};
use log::{debug, info, trace, warn};

use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::observer::{Event, Observer, Observers, Stage};
use crate::algorithm::two_phase::strategy::pivot_rule::{Entering, EnteringMethod, EnteringRule, LeavingRule, MinimumRatio, SmallestNumber, SmallestNumberRatio};
use crate::data::number_types::tolerance::{is_effectively_zero, is_strictly_positive};

/// Settings of a solving session.
///
/// They can be changed between steps through `Solver::set_method` and `Solver::set_bland`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Configuration {
    /// Rule used to select the entering variable.
    pub method: EnteringMethod,
    /// Whether Bland's rule is used for degenerate steps.
    pub bland: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            method: EnteringMethod::default(),
            bland: true,
        }
    }
}

/// How the pivot of a step is chosen.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    /// Use the configured rules for both the entering and leaving variable.
    Auto,
    /// The caller chose the entering column; the leaving row is selected with the ratio test.
    Entering(usize),
    /// The caller chose both the row and the column.
    Pivot {
        /// Row of the leaving variable.
        row: usize,
        /// Column of the entering variable.
        column: usize,
    },
}

/// Which part of the algorithm decided on a pivot.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum PivotOrigin {
    /// The configured entering rule and the minimum ratio test.
    EnteringRule,
    /// Bland's rule, after the configured rules proposed a degenerate pivot.
    Bland,
    /// The pivot that makes the auxiliary dictionary feasible, or that removes the auxiliary
    /// variable from the basis.
    Feasibility,
    /// The caller of `Solver::step`.
    Caller,
}

/// A basis change that was applied.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pivot {
    /// Row of the leaving variable, and of the entering variable afterwards.
    pub row: usize,
    /// Column of the entering variable, and of the leaving variable afterwards.
    pub column: usize,
    /// Number of the variable that became basic.
    pub entering: usize,
    /// Number of the variable that became non-basic.
    pub leaving: usize,
    /// Who chose it.
    pub origin: PivotOrigin,
}

/// Result of a single step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// The dictionary changed.
    Pivoted(Pivot),
    /// No improving column is left; the dictionary did not change.
    Optimal,
    /// The selected entering variable can increase without bound; the dictionary did not change.
    Unbounded,
}

/// Where the solver is at.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// More steps might change the dictionary.
    Running,
    /// The last step found the dictionary to be optimal.
    Optimal,
    /// The last step found the objective to be unbounded.
    Unbounded,
    /// A selected pivot element was zero. No more steps are accepted.
    Blocked,
}

/// How running the solver until the end finished.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Termination {
    /// See `StepOutcome::Optimal`.
    Optimal,
    /// See `StepOutcome::Unbounded`.
    Unbounded,
}

/// Counts of what the solver did.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    steps: usize,
    pivots: EnumMap<PivotOrigin, usize>,
}

impl Statistics {
    /// Number of completed steps, including those that found the dictionary to be final.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of pivots chosen by the given origin.
    pub fn pivots(&self, origin: PivotOrigin) -> usize {
        self.pivots[origin]
    }

    /// Total number of pivots.
    pub fn total_pivots(&self) -> usize {
        self.pivots.values().sum()
    }

    /// Add the counts of another session to these.
    pub fn merge(&mut self, other: &Statistics) {
        self.steps += other.steps;
        for (origin, count) in &other.pivots {
            self.pivots[origin] += count;
        }
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(
            f, "{} steps, {} pivots ({} by rule, {} by Bland's rule, {} for feasibility, {} by caller)",
            self.steps,
            self.total_pivots(),
            self.pivots[PivotOrigin::EnteringRule],
            self.pivots[PivotOrigin::Bland],
            self.pivots[PivotOrigin::Feasibility],
            self.pivots[PivotOrigin::Caller],
        )
    }
}

/// A step could not be taken. The dictionary is unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepError {
    /// The solver refuses to continue after it encountered a zero pivot element.
    Blocked,
    /// There is no non-basic column with this index.
    ColumnOutOfRange(usize),
    /// There is no basic row with this index.
    RowOutOfRange(usize),
    /// The requested entering column would not increase the objective.
    NotImproving {
        /// Index of the column.
        column: usize,
        /// Its objective coefficient.
        coefficient: f64,
    },
    /// The requested pivot element is zero.
    ZeroPivot {
        /// Row of the element.
        row: usize,
        /// Column of the element.
        column: usize,
    },
}

impl Display for StepError {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            StepError::Blocked => f.write_str("Solver is blocked after a zero pivot element"),
            StepError::ColumnOutOfRange(column) => write!(f, "Column {} does not exist", column),
            StepError::RowOutOfRange(row) => write!(f, "Row {} does not exist", row),
            StepError::NotImproving { column, coefficient } => write!(
                f, "Column {} has objective coefficient {} and does not improve the objective",
                column, coefficient,
            ),
            StepError::ZeroPivot { row, column } => {
                write!(f, "Pivot element at row {}, column {} is zero", row, column)
            },
        }
    }
}

impl Error for StepError {}

/// A solving session on a dictionary.
#[derive(Debug)]
pub struct Solver {
    dictionary: Dictionary,
    configuration: Configuration,
    status: Status,
    statistics: Statistics,
    observers: Observers,
}

impl Solver {
    /// Create a new session without observers.
    pub fn new(dictionary: Dictionary, configuration: Configuration) -> Self {
        Self::with_observers(dictionary, configuration, Observers::new())
    }

    /// Create a new session that notifies the given observers.
    pub fn with_observers(
        dictionary: Dictionary,
        configuration: Configuration,
        observers: Observers,
    ) -> Self {
        Self {
            dictionary,
            configuration,
            status: Status::Running,
            statistics: Statistics::default(),
            observers,
        }
    }

    /// Add an observer to the session.
    pub fn register(&mut self, observer: impl Observer + 'static) {
        self.observers.register(observer);
    }

    /// Do one iteration of the simplex method.
    ///
    /// # Arguments
    ///
    /// * `selection`: Whether the entering column and the leaving row should be selected
    /// automatically.
    ///
    /// # Return value
    ///
    /// The pivot that was applied, or an indication that the dictionary is final.
    ///
    /// # Errors
    ///
    /// When the selection is invalid or the solver is blocked. Nothing is changed in that case.
    pub fn step(&mut self, selection: Selection) -> Result<StepOutcome, StepError> {
        if self.status == Status::Blocked {
            return Err(StepError::Blocked);
        }

        let choice = match selection {
            Selection::Auto => {
                let column = match self.configuration.method.select_entering_column(&self.dictionary) {
                    Entering::Column(column) => column,
                    Entering::Optimal => return Ok(self.finish(Termination::Optimal)),
                    Entering::Unbounded => return Ok(self.finish(Termination::Unbounded)),
                };
                match MinimumRatio.select_leaving_row(&self.dictionary, column) {
                    Some(row) => self.with_bland(row, column, PivotOrigin::EnteringRule),
                    None => return Ok(self.finish(Termination::Unbounded)),
                }
            },
            Selection::Entering(column) => {
                self.check_column(column)?;
                let coefficient = self.dictionary.objective_coefficient(column);
                if !is_strictly_positive(coefficient) {
                    return Err(StepError::NotImproving { column, coefficient });
                }
                match MinimumRatio.select_leaving_row(&self.dictionary, column) {
                    Some(row) => self.with_bland(row, column, PivotOrigin::Caller),
                    None => return Ok(self.finish(Termination::Unbounded)),
                }
            },
            Selection::Pivot { row, column } => {
                self.check_column(column)?;
                if !(1..=self.dictionary.nr_basic()).contains(&row) {
                    return Err(StepError::RowOutOfRange(row));
                }
                if is_effectively_zero(self.dictionary.get(row, column)) {
                    return Err(StepError::ZeroPivot { row, column });
                }
                Ok((row, column, PivotOrigin::Caller))
            },
        };
        let (row, column, origin) = match choice {
            Ok(choice) => choice,
            Err(outcome) => return Ok(outcome),
        };

        if is_effectively_zero(self.dictionary.get(row, column)) {
            warn!("Selected pivot element at row {}, column {} is zero, blocking", row, column);
            self.status = Status::Blocked;
            return Err(StepError::ZeroPivot { row, column });
        }

        self.statistics.steps += 1;
        self.status = Status::Running;
        Ok(StepOutcome::Pivoted(self.apply(row, column, origin)))
    }

    /// Take steps using the configured rules until the dictionary is optimal or unbounded.
    ///
    /// Note that this doesn't terminate when the dictionary cycles, which can only happen with
    /// Bland's rule disabled.
    pub fn run(&mut self) -> Result<Termination, StepError> {
        loop {
            match self.step(Selection::Auto)? {
                StepOutcome::Pivoted(_) => {},
                StepOutcome::Optimal => break Ok(Termination::Optimal),
                StepOutcome::Unbounded => break Ok(Termination::Unbounded),
            }
        }
    }

    /// Redo a degenerate selection with Bland's rule if it is enabled.
    ///
    /// # Return value
    ///
    /// The final choice of pivot, or the outcome of the step if Bland's rule finds that the
    /// dictionary is final.
    fn with_bland(
        &mut self,
        row: usize,
        column: usize,
        origin: PivotOrigin,
    ) -> Result<(usize, usize, PivotOrigin), StepOutcome> {
        let ratio = -self.dictionary.constant(row) / self.dictionary.get(row, column);
        if !self.configuration.bland || !is_effectively_zero(ratio) {
            return Ok((row, column, origin));
        }

        trace!("Degenerate pivot on row {}, column {}, using Bland's rule", row, column);
        let column = match SmallestNumber.select_entering_column(&self.dictionary) {
            Entering::Column(column) => column,
            Entering::Optimal => return Err(self.finish(Termination::Optimal)),
            Entering::Unbounded => return Err(self.finish(Termination::Unbounded)),
        };
        match SmallestNumberRatio.select_leaving_row(&self.dictionary, column) {
            Some(row) => Ok((row, column, PivotOrigin::Bland)),
            None => Err(self.finish(Termination::Unbounded)),
        }
    }

    fn check_column(&self, column: usize) -> Result<(), StepError> {
        if (1..=self.dictionary.nr_non_basic()).contains(&column) {
            Ok(())
        } else {
            Err(StepError::ColumnOutOfRange(column))
        }
    }

    /// Mark the dictionary as final.
    fn finish(&mut self, termination: Termination) -> StepOutcome {
        self.statistics.steps += 1;
        match termination {
            Termination::Optimal => {
                debug!("Dictionary is optimal with value {}", self.dictionary.objective_value());
                self.status = Status::Optimal;
                StepOutcome::Optimal
            },
            Termination::Unbounded => {
                debug!("Dictionary is unbounded");
                self.status = Status::Unbounded;
                StepOutcome::Unbounded
            },
        }
    }

    /// Pivot without any checks and tell everyone about it.
    ///
    /// The pivot element should not be zero.
    pub(crate) fn apply(&mut self, row: usize, column: usize, origin: PivotOrigin) -> Pivot {
        let pivot = Pivot {
            row,
            column,
            entering: self.dictionary.non_basic_variable(column),
            leaving: self.dictionary.basic_variable(row),
            origin,
        };
        debug!(
            "Pivot on row {}, column {}: x{} enters, x{} leaves ({:?})",
            row, column, pivot.entering, pivot.leaving, origin,
        );

        self.dictionary.pivot(row, column);
        self.statistics.pivots[origin] += 1;
        trace!("Dictionary after pivot:\n{}", self.dictionary);

        self.observers.notify(&Event::Pivot(&pivot));
        self.announce(Stage::Pivoted);

        pivot
    }

    /// Publish the current dictionary to the observers.
    pub fn announce(&mut self, stage: Stage) {
        self.observers.notify(&Event::Dictionary { stage, dictionary: &self.dictionary });
    }

    /// Change the entering rule for the next steps.
    pub fn set_method(&mut self, method: EnteringMethod) {
        if self.configuration.method != method {
            info!("Entering rule changed from {} to {}", self.configuration.method, method);
            self.configuration.method = method;
            self.observers.notify(&Event::MethodChanged(method));
        }
    }

    /// Enable or disable Bland's rule for the next steps.
    pub fn set_bland(&mut self, enabled: bool) {
        if self.configuration.bland != enabled {
            info!("Bland's rule {}", if enabled { "enabled" } else { "disabled" });
            self.configuration.bland = enabled;
            self.observers.notify(&Event::BlandToggled(enabled));
        }
    }

    /// Current dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Current settings.
    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    /// Status after the last step.
    pub fn status(&self) -> Status {
        self.status
    }

    /// What happened so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// End the session.
    pub fn into_parts(self) -> (Dictionary, Statistics, Observers) {
        (self.dictionary, self.statistics, self.observers)
    }
}

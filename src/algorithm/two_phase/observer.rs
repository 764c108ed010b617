//! # Notifications
//!
//! Views can follow the progress of the algorithm by registering an `Observer`. Observers are
//! called synchronously, after the state they are told about has been reached, and they only get
//! to read it.
use std::fmt::{Debug, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::solver::Pivot;
use crate::algorithm::two_phase::strategy::pivot_rule::EnteringMethod;

/// Moment at which a dictionary snapshot is published.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    /// The dictionary as it was provided to the solver.
    Initial,
    /// The auxiliary dictionary of the first phase, before the feasibility pivot.
    Auxiliary,
    /// The result of a pivot.
    Pivoted,
    /// The first dictionary of the second phase, with the original objective function.
    PhaseTwo,
}

/// Something that happened that a view might want to show.
#[derive(Debug)]
pub enum Event<'a> {
    /// A new dictionary is available.
    Dictionary {
        /// Why this dictionary is published.
        stage: Stage,
        /// Snapshot of the dictionary.
        dictionary: &'a Dictionary,
    },
    /// A pivot was applied. It is followed by the resulting dictionary.
    Pivot(&'a Pivot),
    /// A different entering rule was configured.
    MethodChanged(EnteringMethod),
    /// Bland's rule was enabled or disabled.
    BlandToggled(bool),
}

/// Receives events.
pub trait Observer {
    /// Called for every event. Should not take long, the algorithm waits for it.
    fn notify(&mut self, event: &Event);
}

/// Use a closure as an observer.
pub struct FnObserver<F>(F);

impl<F> FnObserver<F>
where
    F: FnMut(&Event),
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Observer for FnObserver<F>
where
    F: FnMut(&Event),
{
    fn notify(&mut self, event: &Event) {
        (self.0)(event)
    }
}

/// All observers of a solving session, notified in order of registration.
#[derive(Default)]
pub struct Observers {
    observers: Vec<Box<dyn Observer>>,
}

impl Observers {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer. It will receive all events from now on.
    pub fn register(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Send an event to every observer.
    pub fn notify(&mut self, event: &Event) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Debug for Observers {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "Observers({})", self.observers.len())
    }
}

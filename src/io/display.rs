//! # Textual view
//!
//! Writes every dictionary the algorithm produces, so that its progress can be followed.
use std::io::Write;

use log::warn;

use crate::algorithm::two_phase::observer::{Event, Observer, Stage};
use crate::algorithm::two_phase::solver::PivotOrigin;

/// Observer writing a human-readable account of all events.
///
/// Write errors don't interrupt the algorithm; they are logged and writing continues with the next
/// event.
pub struct WriterObserver<W> {
    writer: W,
}

impl<W: Write> WriterObserver<W> {
    /// Write to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &Event) -> std::io::Result<()> {
        match event {
            Event::Dictionary { stage, dictionary } => {
                let title = match stage {
                    Stage::Initial => "Initial dictionary",
                    Stage::Auxiliary => "Auxiliary dictionary",
                    Stage::Pivoted => "Dictionary",
                    Stage::PhaseTwo => "Initial dictionary of phase two",
                };
                writeln!(self.writer, "{}:\n{}", title, dictionary)
            },
            Event::Pivot(pivot) => {
                let origin = match pivot.origin {
                    PivotOrigin::EnteringRule => "entering rule",
                    PivotOrigin::Bland => "Bland's rule",
                    PivotOrigin::Feasibility => "feasibility",
                    PivotOrigin::Caller => "chosen",
                };
                writeln!(
                    self.writer, "Pivot: x{} enters, x{} leaves (row {}, column {}, {})",
                    pivot.entering, pivot.leaving, pivot.row, pivot.column, origin,
                )
            },
            Event::MethodChanged(method) => {
                writeln!(self.writer, "Entering rule: {}", method)
            },
            Event::BlandToggled(enabled) => {
                writeln!(self.writer, "Bland's rule {}", if *enabled { "enabled" } else { "disabled" })
            },
        }
    }
}

impl<W: Write> Observer for WriterObserver<W> {
    fn notify(&mut self, event: &Event) {
        if let Err(error) = self.write_event(event) {
            warn!("Could not write event: {}", error);
        }
    }
}

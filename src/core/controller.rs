//! Entry/listing state machine that sits between the form and the table.

use tracing::{debug, info};

use crate::core::clock::Clock;
use crate::core::record_store::RecordStore;
use crate::core::renderer::{project, DisplayRow};
use crate::core::validator::build_record;
use crate::domain::{Candidate, Record, RecordCollection};
use crate::errors::ControllerError;

/// Which half of the widget is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Entry,
    Listing,
}

/// Triggers coming from the input side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Submit(Candidate),
    ShowEntryForm,
}

/// What an accepted event changed. Any variant other than `Unchanged` is a re-render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Committed(Record),
    ModeChanged(ViewMode),
    Unchanged,
}

pub struct ViewController {
    store: RecordStore,
    clock: Box<dyn Clock>,
    mode: ViewMode,
    input: Candidate,
}

impl ViewController {
    /// Starts in `Entry` when the store holds no records, otherwise in `Listing`.
    pub fn new(store: RecordStore, clock: Box<dyn Clock>) -> Self {
        let mode = if store.records().is_empty() {
            ViewMode::Entry
        } else {
            ViewMode::Listing
        };
        Self {
            store,
            clock,
            mode,
            input: Candidate::default(),
        }
    }

    pub fn handle(&mut self, event: Event) -> Result<Transition, ControllerError> {
        match event {
            Event::Submit(candidate) => self.submit(candidate),
            Event::ShowEntryForm => Ok(self.show_entry_form()),
        }
    }

    /// Validates and commits a form submission.
    ///
    /// On any failure the mode and the input buffer are left as they were and the
    /// store is not advanced.
    pub fn submit(&mut self, candidate: Candidate) -> Result<Transition, ControllerError> {
        if self.mode != ViewMode::Entry {
            debug!("submit ignored outside entry mode");
            return Ok(Transition::Unchanged);
        }
        self.input = candidate;

        let record = build_record(&self.input, self.clock.today()).map_err(|report| {
            debug!(fields = %report.summary(), "submit rejected");
            ControllerError::Validation(report)
        })?;

        let total = self.store.append(record.clone())?.len();
        self.mode = ViewMode::Listing;
        self.input = Candidate::default();
        info!(student = %record.full_name(), total, "student added");
        Ok(Transition::Committed(record))
    }

    pub fn show_entry_form(&mut self) -> Transition {
        if self.mode == ViewMode::Entry {
            return Transition::Unchanged;
        }
        self.mode = ViewMode::Entry;
        debug!("switched to entry mode");
        Transition::ModeChanged(ViewMode::Entry)
    }

    /// Projects the current records as of today's date. Never cached.
    pub fn rows(&self) -> Vec<DisplayRow> {
        project(self.store.records(), self.clock.today())
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn records(&self) -> &RecordCollection {
        self.store.records()
    }

    /// Last submitted input still awaiting a successful commit.
    pub fn input(&self) -> &Candidate {
        &self.input
    }
}

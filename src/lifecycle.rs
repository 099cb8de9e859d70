//! Draft finalization.
//!
//! Freezes a draft into a `Report`, assigning the id and creation timestamp
//! from an injectable clock so tests can pin both.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::model::{Draft, Report};

/// Time source for ids and creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Assigns ids and timestamps at finalization. Ids are the creation instant
/// in Unix milliseconds, bumped when two reports land on the same instant so
/// ids stay unique within a process.
pub struct Finalizer<C = SystemClock> {
    clock: C,
    last_millis: i64,
}

impl Finalizer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Finalizer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Finalizer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last_millis: 0,
        }
    }

    /// Freeze `draft` into a report. The report is a structural copy of the
    /// draft at the instant of the call; mutating the draft afterwards does
    /// not touch it. There is no validation gate: a report may be finalized
    /// with every field empty.
    pub fn finalize(&mut self, draft: &Draft) -> Report {
        let now = self.clock.now();
        let mut millis = now.timestamp_millis();
        if millis <= self.last_millis {
            millis = self.last_millis + 1;
        }
        self.last_millis = millis;

        Report {
            id: millis.to_string(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            photo_url: draft.photo.data_uri().map(str::to_owned),
            name: draft.name.clone(),
            email: draft.email.clone(),
            mobile: draft.mobile.clone(),
            department: draft.department.clone(),
            date: draft.date.clone(),
            objective: draft.objective.clone(),
            report: draft.report.clone(),
            event_name: draft.event_name.clone(),
            date_from: draft.date_from.clone(),
            date_to: draft.date_to.clone(),
        }
    }
}

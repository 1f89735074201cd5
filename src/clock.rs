//! Clock source feeding the current time into the reactive graph.

use chrono::{Duration, NaiveDateTime};
use log::{debug, trace};

use crate::reactive::{Store, StoreReader};

/// Publishes the current time on a fixed cadence. Never moves backwards.
#[derive(Debug, Clone)]
pub struct Clock {
    current: Store<NaiveDateTime>,
    reader: StoreReader<NaiveDateTime>,
    cadence: Duration,
}

impl Clock {
    pub fn new(now: NaiveDateTime, cadence: Duration) -> Self {
        let current = Store::new(now);
        Self {
            reader: current.reader(),
            current,
            cadence,
        }
    }

    /// The time channel consumed by derived visuals.
    pub fn current_time(&self) -> &StoreReader<NaiveDateTime> {
        &self.reader
    }

    pub fn now(&self) -> NaiveDateTime {
        self.current.with(|now| *now)
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Time left until the next publish is due, relative to `now`.
    pub fn until_next_tick(&self, now: NaiveDateTime) -> Duration {
        (self.now() + self.cadence - now).max(Duration::zero())
    }

    /// Publish `now` if a full cadence has elapsed. Returns whether it did.
    pub fn poll(&self, now: NaiveDateTime) -> bool {
        if now - self.now() < self.cadence {
            trace!("event=clock_poll status=skipped");
            return false;
        }
        self.tick(now)
    }

    /// Publish `now` unless it would move the clock backwards or not at all.
    pub fn tick(&self, now: NaiveDateTime) -> bool {
        let current = self.now();
        if now <= current {
            debug!("event=clock_tick status=ignored now={now} current={current}");
            return false;
        }
        self.current.set(now);
        true
    }
}

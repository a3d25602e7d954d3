use crate::ports::{Clock, RecordSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: RecordSource, C: Clock> {
    records: S,
    clock: C,
}

impl<S: RecordSource, C: Clock> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(records: S, clock: C) -> Self {
        Self { records, clock }
    }

    /// Get a reference to the record source.
    pub fn records(&self) -> &S {
        &self.records
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

// src/table.rs

//! The signal/deadline table: an ordered set of escalation steps, each
//! fired at most once.
//!
//! Entries are not required to arrive sorted by deadline, so every unfired
//! entry is evaluated on every tick. Construction resolves all signal
//! names eagerly so that bad configuration surfaces before anything is
//! spawned.

use crate::errors::{MultiTimeoutError, Result};
use crate::signal::SignalSpec;

/// One escalation step: deliver `signal` once `deadline_secs` have elapsed.
#[derive(Debug, Clone)]
struct TimeoutEntry {
    signal: SignalSpec,
    signo: i32,
    deadline_secs: u64,
    fired: bool,
}

/// A signal due for delivery at the current tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueSignal {
    /// The identifier as the user wrote it, for the kill notice.
    pub spec: SignalSpec,
    /// The resolved raw signal number.
    pub signo: i32,
    pub deadline_secs: u64,
}

/// Declaration-ordered collection of timeout entries.
#[derive(Debug)]
pub struct TimeoutTable {
    entries: Vec<TimeoutEntry>,
}

impl TimeoutTable {
    /// Build the table. A supervisor with no escalation policy is
    /// meaningless, so zero pairs is an error.
    pub fn new(pairs: Vec<(SignalSpec, u64)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(MultiTimeoutError::NoTimeoutsSpecified);
        }

        let entries = pairs
            .into_iter()
            .map(|(signal, deadline_secs)| {
                let signo = signal.resolve()?;
                Ok(TimeoutEntry {
                    signal,
                    signo,
                    deadline_secs,
                    fired: false,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Unfired entries whose deadline has been reached, in declaration
    /// order. Returned entries are marked fired in the same call and are
    /// never returned again.
    pub fn due_entries(&mut self, elapsed_secs: u64) -> Vec<DueSignal> {
        let mut due = Vec::new();
        for entry in &mut self.entries {
            if !entry.fired && elapsed_secs >= entry.deadline_secs {
                entry.fired = true;
                due.push(DueSignal {
                    spec: entry.signal.clone(),
                    signo: entry.signo,
                    deadline_secs: entry.deadline_secs,
                });
            }
        }
        due
    }

    /// Whether every entry has fired. The clock may keep idling after
    /// this; it is not a required stop condition.
    pub fn all_fired(&self) -> bool {
        self.entries.iter().all(|e| e.fired)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// src/monitor.rs

//! The escalation clock: a ticking task that delivers due signals to the
//! supervised process group until the group dies or the wait side says
//! stop.
//!
//! The clock races benignly with the supervisor's blocking wait: whichever
//! observes process death first winds supervision down. The exit status
//! always comes from the wait, never from here.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::process;
use crate::table::TimeoutTable;

/// Default tick length: one second of real time per elapsed second.
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Commands longer than this are shortened with a `...` suffix in notices.
pub const NOTICE_COMMAND_WIDTH: usize = 30;

/// Why the clock stopped. Callers discard this; it exists for logging and
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The liveness probe reported the process group gone.
    ProcessDead,
    /// The supervisor's wait returned (stop channel fired or closed).
    WaitCompleted,
}

pub struct EscalationMonitor {
    table: TimeoutTable,
    pgid: i32,
    label: String,
    tick: Duration,
}

impl EscalationMonitor {
    /// Tick length is a plain constructor parameter; there is no global
    /// mutable state. `command_line` is used (truncated) in kill notices.
    pub fn new(table: TimeoutTable, pgid: i32, command_line: &str, tick: Duration) -> Self {
        Self {
            table,
            pgid,
            label: truncate(command_line, NOTICE_COMMAND_WIDTH),
            tick,
        }
    }

    /// Tick until the group is confirmed dead or `stop` fires.
    ///
    /// The first tick completes immediately at elapsed 0, so a zero
    /// deadline fires at once and a 1-second deadline fires after one tick
    /// of sleep. Ties fire in declaration order. An exhausted table keeps
    /// the clock idling on liveness checks only. Elapsed time accumulates
    /// tick by tick, so sub-second ticks advance it fractionally rather
    /// than by a whole second each.
    pub async fn run(mut self, mut stop: oneshot::Receiver<()>) -> StopReason {
        let mut interval = time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut elapsed = Duration::ZERO;

        loop {
            tokio::select! {
                _ = &mut stop => {
                    debug!("wait completed; stopping escalation clock");
                    return StopReason::WaitCompleted;
                }
                _ = interval.tick() => {
                    if !process::group_alive(self.pgid) {
                        debug!(pgid = self.pgid, "process group dead; stopping escalation clock");
                        return StopReason::ProcessDead;
                    }

                    let elapsed_secs = elapsed.as_secs();
                    for due in self.table.due_entries(elapsed_secs) {
                        // The one line of mandated stdout output.
                        println!(
                            "Killing '{}' with signal {} after {} seconds",
                            self.label, due.spec, elapsed_secs
                        );
                        process::signal_group(self.pgid, due.signo);
                    }

                    elapsed += self.tick;
                }
            }
        }
    }
}

/// Shorten `text` to at most `width` characters, replacing the tail with
/// `...` when it does not fit.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let keep: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{keep}...")
    } else {
        text.to_string()
    }
}

// src/lib.rs

pub mod cli;
pub mod duration;
pub mod errors;
pub mod logging;
pub mod monitor;
pub mod process;
pub mod signal;
pub mod table;

use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::errors::Result;
use crate::monitor::{DEFAULT_TICK, EscalationMonitor};
use crate::signal::SignalSpec;
use crate::table::TimeoutTable;

/// High-level entry point used by `main.rs`.
///
/// Supervises the `command` argv under the given escalation pairs and
/// returns the exit code to report. This wires together:
/// - the signal/deadline table (validated before anything is spawned)
/// - the process supervisor (spawn + wait)
/// - the escalation clock, running concurrently with the wait
///
/// The clock's outcome is discarded; the exit code always comes from the
/// supervisor's wait. `run` owns the full lifecycle: it blocks until the
/// child exits, however long that takes, and appends no implicit
/// last-resort signal beyond what the caller configured.
pub async fn run(command: &[String], timeouts: Vec<(SignalSpec, u64)>) -> Result<i32> {
    let table = TimeoutTable::new(timeouts)?;

    let child = process::spawn(command)?;
    let label = command.join(" ");
    info!(pid = child.pid(), command = %label, "supervising command");

    // The spawn above fully populates pid/pgid before the clock task
    // starts, so the clock never observes a half-initialised handle.
    let (stop_tx, stop_rx) = oneshot::channel();
    let clock = EscalationMonitor::new(table, child.pgid(), &label, DEFAULT_TICK);
    let clock_handle = tokio::spawn(clock.run(stop_rx));

    let code = child.wait().await?;

    // Wind the clock down promptly instead of leaving it to notice death
    // on its next poll.
    let _ = stop_tx.send(());
    let _ = clock_handle.await;

    debug!(code, "supervision finished");
    Ok(code)
}

// src/process.rs

//! Process supervision: spawn the command as its own process-group leader,
//! wait for it, probe liveness, deliver group-wide signals.

use std::io;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::{MultiTimeoutError, Result};

/// A spawned command plus the ids the escalation clock needs.
#[derive(Debug)]
pub struct SupervisedChild {
    child: tokio::process::Child,
    pid: i32,
    pgid: i32,
}

/// Spawn the command argv as the leader of a fresh process group.
///
/// Tokens are exec'd directly, so their boundaries survive intact; a
/// caller wanting shell syntax passes `sh -c '...'` explicitly. A missing
/// or unrunnable executable is `SpawnFailed` — no monitoring starts.
///
/// Group leadership is a correctness requirement, not an optimization: the
/// command may fork nested shells or pipelines, and signals sent to the
/// group must reach all of them, not just the immediate child.
pub fn spawn(command: &[String]) -> Result<SupervisedChild> {
    let (program, args) = command
        .split_first()
        .ok_or(MultiTimeoutError::NoCommandGiven)?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.process_group(0);

    let child = cmd
        .spawn()
        .map_err(|source| MultiTimeoutError::SpawnFailed {
            command: command.join(" "),
            source,
        })?;

    // id() is None only once the child has been polled to completion,
    // which cannot have happened yet.
    let pid = match child.id() {
        Some(id) => id as i32,
        None => {
            return Err(MultiTimeoutError::SpawnFailed {
                command: command.join(" "),
                source: io::Error::other("spawned child has no pid"),
            });
        }
    };

    debug!(pid, "spawned command in its own process group");

    // process_group(0) makes the child the group leader, so pgid == pid.
    Ok(SupervisedChild {
        child,
        pid,
        pgid: pid,
    })
}

impl SupervisedChild {
    pub fn pid(&self) -> i32 {
        self.pid
    }

    pub fn pgid(&self) -> i32 {
        self.pgid
    }

    /// Block until the child terminates and return its exit code.
    ///
    /// A child reaped without a conventional code (killed by a signal)
    /// reports exit code 1. Consumes the handle: after this the process is
    /// terminal and no further wait or kill is valid against it.
    pub async fn wait(mut self) -> Result<i32> {
        let status = self.child.wait().await?;
        let code = status.code().unwrap_or(1);
        debug!(pid = self.pid, code, "command exited");
        Ok(code)
    }
}

/// Is the process group still known to the kernel?
///
/// Only "no such process" counts as dead. A zombie still claims its id and
/// reports alive; any other probe failure (e.g. permissions) also counts
/// as alive so escalation never stops on a false negative.
pub fn group_alive(pgid: i32) -> bool {
    // SAFETY: killpg with signal 0 performs existence/permission checks only.
    let rc = unsafe { libc::killpg(pgid, 0) };
    if rc == 0 {
        return true;
    }
    io::Error::last_os_error().raw_os_error() != Some(libc::ESRCH)
}

/// Deliver `signo` to every process in the group.
///
/// ESRCH means the group died between the liveness check and the kill; the
/// goal was met incidentally, so it is swallowed.
pub fn signal_group(pgid: i32, signo: i32) {
    // SAFETY: killpg on a pgid we spawned; failure is read back via errno.
    let rc = unsafe { libc::killpg(pgid, signo) };
    if rc != 0 {
        let err = io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::ESRCH) {
            debug!(pgid, signo, "process group already gone");
        } else {
            warn!(pgid, signo, error = %err, "signal delivery failed");
        }
    }
}

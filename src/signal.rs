// src/signal.rs

//! Signal identifiers as they appear on the command line.
//!
//! A timeout pair names its signal numerically (`-9`) or symbolically
//! (`-HUP`, `-USR2`). Both resolve into the same raw signal space; the
//! original spelling is kept so kill notices read back exactly what the
//! user wrote.

use std::fmt;

use crate::errors::{MultiTimeoutError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalSpec {
    Number(i32),
    Name(String),
}

impl SignalSpec {
    /// Build a spec from the identifier part of a `-<signal>` token (dash
    /// already stripped). Digit-only identifiers become `Number`.
    pub fn from_token(ident: &str) -> Self {
        match ident.parse::<i32>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Name(ident.to_string()),
        }
    }

    /// Resolve to a raw signal number, failing for unknown names and
    /// out-of-range numbers.
    pub fn resolve(&self) -> Result<i32> {
        match self {
            Self::Number(n) if (1..=31).contains(n) => Ok(*n),
            Self::Number(n) => Err(MultiTimeoutError::InvalidSignal(n.to_string())),
            Self::Name(name) => signal_number_by_name(name)
                .ok_or_else(|| MultiTimeoutError::InvalidSignal(name.clone())),
        }
    }
}

impl fmt::Display for SignalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Map a symbolic name to its number. An optional `SIG` prefix and any
/// casing are accepted, the way `kill(1)` accepts them.
fn signal_number_by_name(name: &str) -> Option<i32> {
    let upper = name.to_ascii_uppercase();
    let bare = upper.strip_prefix("SIG").unwrap_or(&upper);

    let signo = match bare {
        "HUP" => libc::SIGHUP,
        "INT" => libc::SIGINT,
        "QUIT" => libc::SIGQUIT,
        "ILL" => libc::SIGILL,
        "TRAP" => libc::SIGTRAP,
        "ABRT" | "IOT" => libc::SIGABRT,
        "BUS" => libc::SIGBUS,
        "FPE" => libc::SIGFPE,
        "KILL" => libc::SIGKILL,
        "USR1" => libc::SIGUSR1,
        "SEGV" => libc::SIGSEGV,
        "USR2" => libc::SIGUSR2,
        "PIPE" => libc::SIGPIPE,
        "ALRM" => libc::SIGALRM,
        "TERM" => libc::SIGTERM,
        "CHLD" => libc::SIGCHLD,
        "CONT" => libc::SIGCONT,
        "STOP" => libc::SIGSTOP,
        "TSTP" => libc::SIGTSTP,
        "TTIN" => libc::SIGTTIN,
        "TTOU" => libc::SIGTTOU,
        "URG" => libc::SIGURG,
        "XCPU" => libc::SIGXCPU,
        "XFSZ" => libc::SIGXFSZ,
        "VTALRM" => libc::SIGVTALRM,
        "PROF" => libc::SIGPROF,
        "WINCH" => libc::SIGWINCH,
        "IO" => libc::SIGIO,
        "SYS" => libc::SIGSYS,
        _ => return None,
    };
    Some(signo)
}

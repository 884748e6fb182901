// src/cli.rs

//! Argv parsing for the `multi-timeout` CLI.
//!
//! The surface is `multi-timeout -<signal> <duration> [...] command...`,
//! e.g. `multi-timeout -9 5s -2 4s sleep 20`. Signal tokens like `-9` or
//! `-HUP` cannot be modelled as ordinary flags, so tokens are consumed by
//! hand: first the (signal, duration) pairs wherever they appear, then
//! leading option tokens, and whatever remains is the command argv. Token
//! boundaries are preserved all the way to exec; the tokens are only ever
//! joined for display.

use regex::Regex;

use crate::duration::parse_duration;
use crate::errors::{MultiTimeoutError, Result};
use crate::signal::SignalSpec;

/// A dash-prefixed numeral or uppercase-letter/digit identifier: `-9`,
/// `-HUP`, `-USR2`. Lowercase tokens like `-v` are left for option
/// handling.
const SIGNAL_TOKEN: &str = r"^-(\d+|[A-Z\d]+)$";

pub const USAGE: &str = "\
Use multiple timeouts to soft and then hard kill a command

Usage:
    multi-timeout -9 5s -2 4s sleep 20

Options:
    -SIGNAL TIME     Kill with this SIGNAL after TIME
    -h, --help       Show this.
    -v, --version    Show Version
";

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Supervise `command` under the given escalation pairs.
    Run {
        command: Vec<String>,
        timeouts: Vec<(SignalSpec, u64)>,
    },
    Help,
    Version,
}

/// Parse raw argv (without the program name).
///
/// All failures here are configuration errors: they surface before any
/// process is spawned.
pub fn parse_args(argv: &[String]) -> Result<Invocation> {
    let (timeouts, rest) = consume_signals(argv)?;
    let (command, options) = consume_command(&rest);

    for option in &options {
        match option.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-v" | "--version" => return Ok(Invocation::Version),
            other => {
                return Err(MultiTimeoutError::UnrecognizedOption(other.to_string()));
            }
        }
    }

    if timeouts.is_empty() {
        return Err(MultiTimeoutError::NoTimeoutsSpecified);
    }
    if command.is_empty() {
        return Err(MultiTimeoutError::NoCommandGiven);
    }

    Ok(Invocation::Run { command, timeouts })
}

/// Extract `-<signal> <duration>` pairs, leaving every other token in
/// place. A signal token binds the next token as its duration wherever the
/// pair appears in argv; a trailing signal token with no duration is
/// dropped.
pub fn consume_signals(argv: &[String]) -> Result<(Vec<(SignalSpec, u64)>, Vec<String>)> {
    let signal_token = Regex::new(SIGNAL_TOKEN).expect("signal token pattern is valid");

    let mut timeouts = Vec::new();
    let mut rest = Vec::new();
    let mut pending: Option<SignalSpec> = None;

    for token in argv {
        if let Some(spec) = pending.take() {
            timeouts.push((spec, parse_duration(token)?));
        } else if let Some(caps) = signal_token.captures(token) {
            pending = Some(SignalSpec::from_token(&caps[1]));
        } else {
            rest.push(token.clone());
        }
    }

    Ok((timeouts, rest))
}

/// Split leading `-` option tokens from the command tail. The tail is the
/// command argv, returned with its token boundaries intact.
pub fn consume_command(argv: &[String]) -> (Vec<String>, Vec<String>) {
    let split = argv
        .iter()
        .position(|t| !t.starts_with('-'))
        .unwrap_or(argv.len());

    let options = argv[..split].to_vec();
    let command = argv[split..].to_vec();
    (command, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn consume_signals_finds_nothing() {
        let (timeouts, rest) = consume_signals(&argv(&[])).unwrap();
        assert!(timeouts.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn consume_signals_leaves_unrelated_tokens() {
        let (timeouts, rest) = consume_signals(&argv(&["10m", "-v", "--help"])).unwrap();
        assert!(timeouts.is_empty());
        assert_eq!(rest, argv(&["10m", "-v", "--help"]));
    }

    #[test]
    fn consume_signals_finds_one_pair() {
        let (timeouts, rest) =
            consume_signals(&argv(&["10m", "-v", "-9", "1m", "--help"])).unwrap();
        assert_eq!(timeouts, vec![(SignalSpec::Number(9), 60)]);
        assert_eq!(rest, argv(&["10m", "-v", "--help"]));
    }

    #[test]
    fn consume_signals_finds_multiple_pairs() {
        let (timeouts, rest) =
            consume_signals(&argv(&["10m", "-v", "-9", "1m", "-2", "22s", "--help"])).unwrap();
        assert_eq!(
            timeouts,
            vec![(SignalSpec::Number(9), 60), (SignalSpec::Number(2), 22)]
        );
        assert_eq!(rest, argv(&["10m", "-v", "--help"]));
    }

    #[test]
    fn consume_signals_finds_symbolic_signals() {
        let (timeouts, _) = consume_signals(&argv(&["10m", "-v", "-HUP", "1m", "--help"])).unwrap();
        assert_eq!(timeouts, vec![(SignalSpec::Name("HUP".into()), 60)]);

        let (timeouts, _) =
            consume_signals(&argv(&["10m", "-v", "-USR2", "1m", "--help"])).unwrap();
        assert_eq!(timeouts, vec![(SignalSpec::Name("USR2".into()), 60)]);
    }

    #[test]
    fn consume_signals_rejects_bad_durations() {
        assert!(consume_signals(&argv(&["-9", "10x", "sleep", "1"])).is_err());
    }

    #[test]
    fn consume_command_leaves_only_command() {
        let (command, options) = consume_command(&argv(&["xxx", "-v"]));
        assert_eq!(command, argv(&["xxx", "-v"]));
        assert!(options.is_empty());
    }

    #[test]
    fn consume_command_splits_leading_options() {
        let (command, options) = consume_command(&argv(&["-x", "-y", "xxx", "-v"]));
        assert_eq!(command, argv(&["xxx", "-v"]));
        assert_eq!(options, argv(&["-x", "-y"]));
    }

    #[test]
    fn parses_a_normal_invocation() {
        let invocation = parse_args(&argv(&["-9", "10m", "sleep", "100"])).unwrap();
        assert_eq!(
            invocation,
            Invocation::Run {
                command: argv(&["sleep", "100"]),
                timeouts: vec![(SignalSpec::Number(9), 600)],
            }
        );
    }

    #[test]
    fn command_tokens_keep_their_boundaries() {
        // "exit 123" must stay one token all the way to exec; joining on
        // spaces would make the shell exit 0 with "123" as $0.
        let invocation = parse_args(&argv(&["-2", "1", "-9", "2", "sh", "-c", "exit 123"])).unwrap();
        match invocation {
            Invocation::Run { command, .. } => {
                assert_eq!(command, argv(&["sh", "-c", "exit 123"]));
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn fails_without_timeouts() {
        match parse_args(&argv(&["sleep", "100"])) {
            Err(MultiTimeoutError::NoTimeoutsSpecified) => {}
            other => panic!("expected NoTimeoutsSpecified, got {other:?}"),
        }
    }

    #[test]
    fn fails_on_unrecognized_option() {
        match parse_args(&argv(&["-9", "1", "-f", "1", "sleep", "1"])) {
            Err(MultiTimeoutError::UnrecognizedOption(opt)) => assert_eq!(opt, "-f"),
            other => panic!("expected UnrecognizedOption, got {other:?}"),
        }
    }

    #[test]
    fn fails_without_a_command() {
        match parse_args(&argv(&["-9", "1"])) {
            Err(MultiTimeoutError::NoCommandGiven) => {}
            other => panic!("expected NoCommandGiven, got {other:?}"),
        }
    }

    #[test]
    fn recognizes_help_and_version() {
        assert_eq!(parse_args(&argv(&["-h"])).unwrap(), Invocation::Help);
        assert_eq!(parse_args(&argv(&["--help"])).unwrap(), Invocation::Help);
        assert_eq!(parse_args(&argv(&["-v"])).unwrap(), Invocation::Version);
        assert_eq!(
            parse_args(&argv(&["--version"])).unwrap(),
            Invocation::Version
        );
    }

    #[test]
    fn trailing_signal_without_duration_is_dropped() {
        let (timeouts, rest) = consume_signals(&argv(&["sleep", "1", "-9"])).unwrap();
        assert!(timeouts.is_empty());
        assert_eq!(rest, argv(&["sleep", "1"]));
    }
}

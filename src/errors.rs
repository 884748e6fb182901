// src/errors.rs

//! Crate-wide error taxonomy and `Result` alias.
//!
//! Configuration errors (`InvalidDurationFormat`, `NoTimeoutsSpecified`,
//! `UnrecognizedOption`, `InvalidSignal`, `NoCommandGiven`) surface before
//! any process is spawned. `SpawnFailed` means nothing was monitored.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultiTimeoutError {
    #[error("Unknown format for time {0}")]
    InvalidDurationFormat(String),

    #[error("No timeouts given")]
    NoTimeoutsSpecified,

    #[error("Unrecognized option: {0}")]
    UnrecognizedOption(String),

    #[error("Unknown signal: {0}")]
    InvalidSignal(String),

    #[error("No command given")]
    NoCommandGiven,

    #[error("Failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, MultiTimeoutError>;

// src/duration.rs

//! Human time strings to whole seconds.
//!
//! The grammar is `digits[unit]` where unit is `s`, `m` or `h`; no unit
//! means seconds. `"51"` and `"51s"` are 51, `"10m"` is 600, `"10h"` is
//! 36000. Anything else is rejected.

use crate::errors::{MultiTimeoutError, Result};

/// Parse a duration token into seconds.
pub fn parse_duration(text: &str) -> Result<u64> {
    let split = text
        .chars()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, unit) = text.split_at(split);

    let value: u64 = digits.parse().map_err(|_| invalid(text))?;

    let factor = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        _ => return Err(invalid(text)),
    };

    value.checked_mul(factor).ok_or_else(|| invalid(text))
}

fn invalid(text: &str) -> MultiTimeoutError {
    MultiTimeoutError::InvalidDurationFormat(text.to_string())
}

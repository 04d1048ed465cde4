//! Duration and target resolution.
//!
//! Turns a rule's raw captures into validated model values: a (magnitude,
//! unit token) pair into a [`Duration`], and an optional `@ ...` clause into
//! a [`Target`].

use std::sync::LazyLock;

use regex::Regex;

use super::error::ParseError;
use crate::types::{DistanceUnit, Duration, HeartRateTarget, PaceTarget, Target, TimeUnit};

/// Maps a magnitude and unit token onto a distance or time duration.
///
/// The token table covers every alias the grammar's unit class admits; an
/// unrecognized token is a hard error, not a guess.
pub(super) fn resolve_duration(value: f64, unit: &str) -> Result<Duration, ParseError> {
    let duration = match unit {
        "km" | "k" | "kilometer" | "kilometers" => Duration::distance(value, DistanceUnit::Km)?,
        "m" | "meter" | "meters" => Duration::distance(value, DistanceUnit::M)?,
        "mi" | "mile" | "miles" => Duration::distance(value, DistanceUnit::Mi)?,
        "min" | "minute" | "minutes" => Duration::time(value, TimeUnit::Min)?,
        "sec" | "second" | "seconds" | "s" => Duration::time(value, TimeUnit::Sec)?,
        "hr" | "hour" | "hours" | "h" => Duration::time(value, TimeUnit::Hr)?,
        other => {
            return Err(ParseError::UnknownUnit {
                unit: other.to_string(),
            });
        }
    };
    Ok(duration)
}

/// A number directly followed by `bpm` or `beat(s)`.
static HEART_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,3})\s*(?:bpm|beats?)").expect("hr pattern is valid"));

/// A clean `M:SS`/`MM:SS` token on word boundaries.
static PACE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})\b").expect("pace pattern is valid"));

/// An entire string that is exactly one pace token.
static PACE_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("pace pattern is valid"));

/// Parses a pace string like `5:30` into a [`PaceTarget`].
///
/// The whole string (after trimming) must be a single `M:SS`/`MM:SS` token
/// with seconds below 60; the resulting pace must land in the model's
/// 60-1200 s/km window.
///
/// # Example
///
/// ```
/// use stride::parse_pace;
///
/// let pace = parse_pace("4:45").unwrap();
/// assert_eq!(pace.min_seconds_per_km(), 285);
/// assert_eq!(pace.to_pace_string(), "4:45");
/// ```
pub fn parse_pace(text: &str) -> Result<PaceTarget, ParseError> {
    let trimmed = text.trim();
    let caps = PACE_EXACT
        .captures(trimmed)
        .ok_or_else(|| ParseError::InvalidPaceFormat {
            text: trimmed.to_string(),
        })?;
    let minutes: u32 = caps[1].parse().unwrap_or(0);
    let seconds: u32 = caps[2].parse().unwrap_or(0);
    if seconds >= 60 {
        return Err(ParseError::InvalidPaceSeconds { seconds });
    }
    Ok(PaceTarget::new(minutes * 60 + seconds, None)?)
}

/// Resolves an optional `@ ...` clause into a target.
///
/// Tried in order: absent or empty means no target; a number followed by a
/// bpm word is a heart-rate target; a clean pace token is a pace target (a
/// colon without a clean token is an error); anything else deliberately
/// degrades to no target rather than failing, so clauses like `@ zone 2`
/// pass through silently.
pub(super) fn resolve_target(clause: Option<&str>) -> Result<Target, ParseError> {
    let Some(clause) = clause else {
        return Ok(Target::Open);
    };
    let clause = clause.trim();
    if clause.is_empty() {
        return Ok(Target::Open);
    }

    if let Some(caps) = HEART_RATE.captures(clause) {
        let bpm: u32 = caps[1].parse().unwrap_or(0);
        return Ok(Target::HeartRate(HeartRateTarget::new(bpm, None)?));
    }

    if let Some(token) = PACE_TOKEN.find(clause) {
        return Ok(Target::Pace(parse_pace(token.as_str())?));
    }
    if clause.contains(':') {
        return Err(ParseError::InvalidPaceFormat {
            text: clause.to_string(),
        });
    }

    Ok(Target::Open)
}

//! Shorthand workout parser.
//!
//! Converts free-text endurance-workout shorthand like
//! `1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest, cooldown` into a
//! validated [`Workout`]. The pipeline is: normalize the text, split it
//! into comma-separated segments, match each segment against an ordered
//! set of grammar rules, and build a validated step per segment. Parsing
//! is a pure function of the input text over a process-wide, immutable
//! compiled rule set, so concurrent parses need no coordination.

mod build;
pub mod error;
mod normalize;
mod resolve;
mod rules;

pub use error::ParseError;
pub use resolve::parse_pace;

use tracing::{debug, trace};

use crate::types::Workout;

/// Parses a shorthand workout description into a validated [`Workout`].
///
/// The workout comes back named `"Untitled Workout"` with sport type
/// `"running"`; callers set metadata afterward.
///
/// # Errors
///
/// [`ParseError::EmptyInput`] for empty or whitespace-only text,
/// [`ParseError::NoStepsFound`] if segmentation yields nothing,
/// [`ParseError::UnparsableSegment`] for a segment no grammar rule
/// recognizes, and pace/unit/validation errors for segments that match but
/// carry bad values.
///
/// # Example
///
/// ```
/// use stride::parse_workout;
///
/// let workout = parse_workout("1km warmup @ 5:30, 5x 1km @ 4:30 + 2min rest, cooldown").unwrap();
/// assert_eq!(workout.steps().len(), 3);
/// assert_eq!(workout.step_count(), 12);
/// ```
pub fn parse_workout(text: &str) -> Result<Workout, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let normalized = normalize::normalize(text);
    debug!(%normalized, "normalized workout description");

    let segments = split_segments(&normalized);
    if segments.is_empty() {
        return Err(ParseError::NoStepsFound);
    }

    let mut steps = Vec::with_capacity(segments.len());
    for segment in segments {
        let matched =
            rules::match_segment(segment).ok_or_else(|| ParseError::UnparsableSegment {
                segment: segment.to_string(),
            })?;
        trace!(segment, rule = matched.rule_name(), "matched grammar rule");
        steps.push(build::build_step(matched)?);
    }

    Ok(Workout::new(steps)?)
}

/// Reports whether every segment of `text` matches some grammar rule,
/// without building any entities.
pub fn can_parse(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let normalized = normalize::normalize(text);
    let segments = split_segments(&normalized);
    !segments.is_empty()
        && segments
            .iter()
            .all(|segment| rules::match_segment(segment).is_some())
}

/// Splits normalized text into trimmed, non-empty segments.
fn split_segments(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

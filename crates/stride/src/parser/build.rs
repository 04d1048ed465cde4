//! Builds validated steps from grammar-rule captures.

use super::error::ParseError;
use super::resolve::{resolve_duration, resolve_target};
use super::rules::{SegmentMatch, infer_step_kind};
use crate::types::{Duration, LeafStep, Step, StepKind, Target};

/// Turns one rule match into a validated step.
///
/// Interval matches become a repeat group wrapping an interval child and,
/// when a recovery clause was captured, a recovery child with no target.
/// Everything goes through the model's smart constructors, so this is the
/// same validation gate programmatic construction hits.
pub(super) fn build_step(matched: SegmentMatch<'_>) -> Result<Step, ParseError> {
    match matched {
        SegmentMatch::Interval {
            count,
            work_value,
            work_unit,
            target,
            recovery_value,
            recovery_unit,
        } => {
            let work = LeafStep::new(
                StepKind::Interval,
                resolve_duration(parse_magnitude(work_value), work_unit)?,
                resolve_target(target)?,
            );
            let mut children = vec![work];
            if let (Some(value), Some(unit)) = (recovery_value, recovery_unit) {
                children.push(LeafStep::new(
                    StepKind::Recovery,
                    resolve_duration(parse_magnitude(value), unit)?,
                    Target::Open,
                ));
            }
            Ok(Step::repeat(parse_count(count), children)?)
        }
        SegmentMatch::Step {
            keyword,
            value,
            unit,
            target,
        } => Ok(Step::leaf(
            infer_step_kind(keyword),
            resolve_duration(parse_magnitude(value), unit)?,
            resolve_target(target)?,
        )),
        SegmentMatch::DurationOnly {
            value,
            unit,
            target,
        } => Ok(Step::leaf(
            // No keyword to go on: a bare duration is a generic effort.
            StepKind::Interval,
            resolve_duration(parse_magnitude(value), unit)?,
            resolve_target(target)?,
        )),
        SegmentMatch::Bare { keyword } => Ok(Step::leaf(
            infer_step_kind(keyword),
            Duration::Open,
            Target::Open,
        )),
    }
}

/// The grammar only captures digit runs with an optional decimal part, so
/// parsing cannot fail; the fallback merely keeps the error path honest.
fn parse_magnitude(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Saturates absurdly long digit runs; the repeat-count bounds check
/// rejects them either way.
fn parse_count(text: &str) -> u64 {
    text.parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DistanceUnit, TimeUnit, ValidationError};

    #[test]
    fn interval_match_builds_repeat_with_recovery() {
        let matched = SegmentMatch::Interval {
            count: "3",
            work_value: "1",
            work_unit: "km",
            target: Some("4:45"),
            recovery_value: Some("2"),
            recovery_unit: Some("min"),
        };
        let Step::Repeat(repeat) = build_step(matched).unwrap() else {
            panic!("expected a repeat group");
        };
        assert_eq!(repeat.count(), 3);
        assert_eq!(repeat.children().len(), 2);

        let work = &repeat.children()[0];
        assert_eq!(work.kind, StepKind::Interval);
        assert_eq!(
            work.duration,
            Duration::Distance {
                value: 1.0,
                unit: DistanceUnit::Km
            }
        );
        assert!(matches!(work.target, Target::Pace(_)));

        let rest = &repeat.children()[1];
        assert_eq!(rest.kind, StepKind::Recovery);
        assert_eq!(
            rest.duration,
            Duration::Time {
                value: 2.0,
                unit: TimeUnit::Min
            }
        );
        assert!(rest.target.is_open());
    }

    #[test]
    fn oversized_repeat_count_is_rejected() {
        let matched = SegmentMatch::Interval {
            count: "150",
            work_value: "1",
            work_unit: "km",
            target: None,
            recovery_value: None,
            recovery_unit: None,
        };
        assert_eq!(
            build_step(matched),
            Err(ParseError::Validation(
                ValidationError::RepeatCountOutOfRange { count: 150 }
            ))
        );
    }

    #[test]
    fn bare_match_builds_fully_open_step() {
        let step = build_step(SegmentMatch::Bare { keyword: "cd" }).unwrap();
        let Step::Leaf(leaf) = step else {
            panic!("expected a leaf step");
        };
        assert_eq!(leaf.kind, StepKind::Cooldown);
        assert!(leaf.duration.is_open());
        assert!(leaf.target.is_open());
    }
}

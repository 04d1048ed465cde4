use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::{Duration, Target, ValidationError};

const REPEAT_COUNT_MAX: u64 = 99;

/// What a leaf step is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Warmup,
    Interval,
    Recovery,
    Cooldown,
}

impl StepKind {
    /// Capitalized label used in display strings.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Warmup => "Warmup",
            StepKind::Interval => "Interval",
            StepKind::Recovery => "Recovery",
            StepKind::Cooldown => "Cooldown",
        }
    }
}

/// A single non-repeat workout step: what to do, for how long, at what
/// intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafStep {
    pub kind: StepKind,
    pub duration: Duration,
    pub target: Target,
}

impl LeafStep {
    pub fn new(kind: StepKind, duration: Duration, target: Target) -> LeafStep {
        LeafStep {
            kind,
            duration,
            target,
        }
    }
}

impl Display for LeafStep {
    /// Renders e.g. `Warmup: 1km @ 5:30/km`, `Cooldown: open`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.kind.label(), self.duration)?;
        match &self.target {
            Target::Open => {}
            Target::Pace(pace) => write!(f, " @ {pace}")?,
            Target::HeartRate(hr) => write!(f, " @ {hr}")?,
            Target::Cadence(cadence) => write!(f, " @ {cadence}")?,
        }
        Ok(())
    }
}

/// A repeat group: `count` passes over an ordered block of leaf steps.
///
/// Children are leaves by construction, so repeat nesting is single-level
/// at the type level instead of being a runtime rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repeat {
    count: u32,
    children: Vec<LeafStep>,
}

impl Repeat {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn children(&self) -> &[LeafStep] {
        &self.children
    }
}

/// One top-level entry in a workout: either a leaf step or a repeat group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Leaf(LeafStep),
    Repeat(Repeat),
}

impl Step {
    /// Creates a leaf step.
    pub fn leaf(kind: StepKind, duration: Duration, target: Target) -> Step {
        Step::Leaf(LeafStep::new(kind, duration, target))
    }

    /// Creates a repeat group, validating the 1-99 count and that the child
    /// block is non-empty.
    pub fn repeat(count: u64, children: Vec<LeafStep>) -> Result<Step, ValidationError> {
        if count == 0 || count > REPEAT_COUNT_MAX {
            return Err(ValidationError::RepeatCountOutOfRange { count });
        }
        if children.is_empty() {
            return Err(ValidationError::EmptyRepeat);
        }
        Ok(Step::Repeat(Repeat {
            count: count as u32,
            children,
        }))
    }

    /// Number of steps an athlete actually performs: a repeat group counts
    /// every child once per pass, a leaf counts as one.
    pub fn flattened_count(&self) -> usize {
        match self {
            Step::Leaf(_) => 1,
            Step::Repeat(repeat) => repeat.children.len() * repeat.count as usize,
        }
    }

    /// Total distance of this step in meters, accounting for repeat passes.
    ///
    /// `None` unless every involved duration is distance-based; this is an
    /// all-or-nothing sum, never partial.
    pub fn meters(&self) -> Option<f64> {
        match self {
            Step::Leaf(leaf) => leaf.duration.meters(),
            Step::Repeat(repeat) => {
                let block: Option<f64> = repeat
                    .children
                    .iter()
                    .map(|child| child.duration.meters())
                    .sum();
                block.map(|meters| meters * f64::from(repeat.count))
            }
        }
    }

    /// Total time of this step in seconds, accounting for repeat passes.
    ///
    /// `None` unless every involved duration is time-based.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Step::Leaf(leaf) => leaf.duration.seconds(),
            Step::Repeat(repeat) => {
                let block: Option<f64> = repeat
                    .children
                    .iter()
                    .map(|child| child.duration.seconds())
                    .sum();
                block.map(|seconds| seconds * f64::from(repeat.count))
            }
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Step::Leaf(leaf) => write!(f, "{leaf}"),
            Step::Repeat(repeat) => write!(f, "Repeat {}x", repeat.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DistanceUnit, TimeUnit};

    fn km(value: f64) -> Duration {
        Duration::distance(value, DistanceUnit::Km).unwrap()
    }

    fn minutes(value: f64) -> Duration {
        Duration::time(value, TimeUnit::Min).unwrap()
    }

    #[test]
    fn repeat_count_bounds() {
        let child = LeafStep::new(StepKind::Interval, km(1.0), Target::Open);
        assert!(Step::repeat(1, vec![child.clone()]).is_ok());
        assert!(Step::repeat(99, vec![child.clone()]).is_ok());
        assert_eq!(
            Step::repeat(0, vec![child.clone()]),
            Err(ValidationError::RepeatCountOutOfRange { count: 0 })
        );
        assert_eq!(
            Step::repeat(100, vec![child]),
            Err(ValidationError::RepeatCountOutOfRange { count: 100 })
        );
    }

    #[test]
    fn repeat_requires_children() {
        assert_eq!(Step::repeat(3, vec![]), Err(ValidationError::EmptyRepeat));
    }

    #[test]
    fn flattened_count_multiplies_children_by_passes() {
        let work = LeafStep::new(StepKind::Interval, km(1.0), Target::Open);
        let rest = LeafStep::new(StepKind::Recovery, minutes(2.0), Target::Open);
        let step = Step::repeat(4, vec![work, rest]).unwrap();
        assert_eq!(step.flattened_count(), 8);

        let leaf = Step::leaf(StepKind::Warmup, km(1.0), Target::Open);
        assert_eq!(leaf.flattened_count(), 1);
    }

    #[test]
    fn repeat_meters_is_all_or_nothing() {
        let work = LeafStep::new(StepKind::Interval, km(1.0), Target::Open);
        let all_distance = Step::repeat(3, vec![work.clone()]).unwrap();
        assert_eq!(all_distance.meters(), Some(3000.0));

        let rest = LeafStep::new(StepKind::Recovery, minutes(2.0), Target::Open);
        let mixed = Step::repeat(3, vec![work, rest]).unwrap();
        assert_eq!(mixed.meters(), None);
        assert_eq!(mixed.seconds(), None);
    }

    #[test]
    fn repeat_seconds_scales_by_count() {
        let work = LeafStep::new(StepKind::Interval, minutes(3.0), Target::Open);
        let rest = LeafStep::new(StepKind::Recovery, minutes(1.0), Target::Open);
        let step = Step::repeat(5, vec![work, rest]).unwrap();
        assert_eq!(step.seconds(), Some(1200.0));
    }
}

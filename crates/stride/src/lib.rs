//! Shorthand workout parsing for athletes who type instead of filling
//! forms.
//!
//! Turns descriptions like `1km warmup @ 5:30, 5x 1km @ 4:30 + 2min rest,
//! 2km @ 165 bpm, cooldown` into a validated [`Workout`]: an ordered step
//! sequence with distance/time durations, pace/heart-rate/cadence targets,
//! and repeat groups, plus derived totals for review before export.
//!
//! # Example
//!
//! ```
//! use stride::{Step, parse_workout};
//!
//! let workout = parse_workout("1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest, 1km cooldown").unwrap();
//! assert_eq!(workout.step_count(), 8);
//! assert!(matches!(workout.steps()[1], Step::Repeat(_)));
//! // Mixed distance/time steps: no total distance is reported.
//! assert_eq!(workout.total_distance_km(), None);
//! ```

pub mod parser;
pub mod types;

pub use parser::{ParseError, can_parse, parse_pace, parse_workout};
pub use types::{
    CadenceTarget, DistanceUnit, Duration, HeartRateTarget, LeafStep, PaceTarget, Repeat, Step,
    StepKind, Target, TimeUnit, ValidationError, Workout,
};

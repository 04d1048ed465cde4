//! Entity-invariant violations raised by the model's smart constructors.

use thiserror::Error;

/// An invariant violation detected while constructing a model entity.
///
/// Every variant names the offending field and carries the rejected value,
/// so callers can report precisely what was wrong. The parser surfaces
/// these through [`ParseError::Validation`](crate::parser::ParseError).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A distance or time magnitude was zero or negative.
    #[error("duration value must be positive, got {value}")]
    NonPositiveDuration { value: f64 },

    /// A pace fell outside the plausible 60-1200 seconds-per-km window.
    #[error("pace must be 60-1200 seconds per km, got {seconds_per_km}")]
    PaceOutOfRange { seconds_per_km: u32 },

    /// A pace range had max faster than min.
    #[error("max pace ({max}) must be >= min pace ({min})")]
    PaceRangeInverted { min: u32, max: u32 },

    /// A heart rate fell outside 40-220 bpm.
    #[error("heart rate must be 40-220 bpm, got {bpm}")]
    HeartRateOutOfRange { bpm: u32 },

    /// A heart rate range had max below min.
    #[error("max heart rate ({max}) must be >= min heart rate ({min})")]
    HeartRateRangeInverted { min: u32, max: u32 },

    /// A cadence fell outside 60-220 steps per minute.
    #[error("cadence must be 60-220 spm, got {spm}")]
    CadenceOutOfRange { spm: u32 },

    /// A cadence range had max below min.
    #[error("max cadence ({max}) must be >= min cadence ({min})")]
    CadenceRangeInverted { min: u32, max: u32 },

    /// A repeat count fell outside 1-99.
    #[error("repeat count must be 1-99, got {count}")]
    RepeatCountOutOfRange { count: u64 },

    /// A repeat group was constructed with no child steps.
    #[error("a repeat group must contain at least one step")]
    EmptyRepeat,

    /// A workout was constructed with no steps.
    #[error("a workout must contain at least one step")]
    EmptyWorkout,

    /// A workout name was empty or longer than 100 characters.
    #[error("workout name must be 1-100 characters, got {length}")]
    NameLength { length: usize },

    /// Workout notes exceeded 500 characters.
    #[error("workout notes must be at most 500 characters, got {length}")]
    NotesTooLong { length: usize },
}

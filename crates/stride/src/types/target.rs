use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::RangeInclusive;

use serde::Serialize;

use super::ValidationError;

const PACE_RANGE: RangeInclusive<u32> = 60..=1200;
const HEART_RATE_RANGE: RangeInclusive<u32> = 40..=220;
const CADENCE_RANGE: RangeInclusive<u32> = 60..=220;

/// A pace target in seconds per kilometer.
///
/// The range is bounded to 1:00/km-20:00/km. A lone `min` means "at this
/// pace"; a populated `max` makes it a range, and `max` must be the slower
/// (larger) end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaceTarget {
    min_seconds_per_km: u32,
    max_seconds_per_km: Option<u32>,
}

impl PaceTarget {
    /// Creates a pace target, validating the 60-1200 s/km bounds and range
    /// ordering.
    pub fn new(
        min_seconds_per_km: u32,
        max_seconds_per_km: Option<u32>,
    ) -> Result<PaceTarget, ValidationError> {
        if !PACE_RANGE.contains(&min_seconds_per_km) {
            return Err(ValidationError::PaceOutOfRange {
                seconds_per_km: min_seconds_per_km,
            });
        }
        if let Some(max) = max_seconds_per_km {
            if !PACE_RANGE.contains(&max) {
                return Err(ValidationError::PaceOutOfRange { seconds_per_km: max });
            }
            if max < min_seconds_per_km {
                return Err(ValidationError::PaceRangeInverted {
                    min: min_seconds_per_km,
                    max,
                });
            }
        }
        Ok(PaceTarget {
            min_seconds_per_km,
            max_seconds_per_km,
        })
    }

    pub fn min_seconds_per_km(&self) -> u32 {
        self.min_seconds_per_km
    }

    pub fn max_seconds_per_km(&self) -> Option<u32> {
        self.max_seconds_per_km
    }

    /// Formats the minimum pace as `M:SS` (minutes unpadded, seconds
    /// zero-padded), the inverse of the parser's pace-token form.
    ///
    /// # Example
    ///
    /// ```
    /// use stride::PaceTarget;
    ///
    /// let pace = PaceTarget::new(330, None).unwrap();
    /// assert_eq!(pace.to_pace_string(), "5:30");
    /// ```
    pub fn to_pace_string(&self) -> String {
        format_pace(self.min_seconds_per_km)
    }
}

impl Display for PaceTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.max_seconds_per_km {
            Some(max) => write!(f, "{}-{}/km", self.to_pace_string(), format_pace(max)),
            None => write!(f, "{}/km", self.to_pace_string()),
        }
    }
}

fn format_pace(seconds_per_km: u32) -> String {
    let minutes = seconds_per_km.div_euclid(60);
    let seconds = seconds_per_km.rem_euclid(60);
    format!("{minutes}:{seconds:02}")
}

/// A heart-rate target in beats per minute, bounded to 40-220 bpm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeartRateTarget {
    min_bpm: u32,
    max_bpm: Option<u32>,
}

impl HeartRateTarget {
    /// Creates a heart-rate target, validating the 40-220 bpm bounds and
    /// range ordering.
    pub fn new(min_bpm: u32, max_bpm: Option<u32>) -> Result<HeartRateTarget, ValidationError> {
        if !HEART_RATE_RANGE.contains(&min_bpm) {
            return Err(ValidationError::HeartRateOutOfRange { bpm: min_bpm });
        }
        if let Some(max) = max_bpm {
            if !HEART_RATE_RANGE.contains(&max) {
                return Err(ValidationError::HeartRateOutOfRange { bpm: max });
            }
            if max < min_bpm {
                return Err(ValidationError::HeartRateRangeInverted { min: min_bpm, max });
            }
        }
        Ok(HeartRateTarget { min_bpm, max_bpm })
    }

    pub fn min_bpm(&self) -> u32 {
        self.min_bpm
    }

    pub fn max_bpm(&self) -> Option<u32> {
        self.max_bpm
    }
}

impl Display for HeartRateTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.max_bpm {
            Some(max) => write!(f, "{}-{} bpm", self.min_bpm, max),
            None => write!(f, "{} bpm", self.min_bpm),
        }
    }
}

/// A cadence target in steps per minute, bounded to 60-220 spm.
///
/// No grammar rule produces cadence targets; they exist for programmatic
/// workout construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CadenceTarget {
    min_spm: u32,
    max_spm: Option<u32>,
}

impl CadenceTarget {
    /// Creates a cadence target, validating the 60-220 spm bounds and range
    /// ordering.
    pub fn new(min_spm: u32, max_spm: Option<u32>) -> Result<CadenceTarget, ValidationError> {
        if !CADENCE_RANGE.contains(&min_spm) {
            return Err(ValidationError::CadenceOutOfRange { spm: min_spm });
        }
        if let Some(max) = max_spm {
            if !CADENCE_RANGE.contains(&max) {
                return Err(ValidationError::CadenceOutOfRange { spm: max });
            }
            if max < min_spm {
                return Err(ValidationError::CadenceRangeInverted { min: min_spm, max });
            }
        }
        Ok(CadenceTarget { min_spm, max_spm })
    }

    pub fn min_spm(&self) -> u32 {
        self.min_spm
    }

    pub fn max_spm(&self) -> Option<u32> {
        self.max_spm
    }
}

impl Display for CadenceTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.max_spm {
            Some(max) => write!(f, "{}-{} spm", self.min_spm, max),
            None => write!(f, "{} spm", self.min_spm),
        }
    }
}

/// The intensity target of a workout step.
///
/// Exactly one payload exists per kind; `Open` means the step has no
/// target. The payload-matches-kind invariant is carried by the enum shape
/// rather than checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// No target.
    Open,
    /// Pace in seconds per kilometer.
    Pace(PaceTarget),
    /// Heart rate in beats per minute.
    HeartRate(HeartRateTarget),
    /// Cadence in steps per minute.
    Cadence(CadenceTarget),
}

impl Target {
    /// Whether this step has no target.
    pub fn is_open(&self) -> bool {
        matches!(self, Target::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_bounds_are_enforced() {
        assert!(PaceTarget::new(60, None).is_ok());
        assert!(PaceTarget::new(1200, None).is_ok());
        assert_eq!(
            PaceTarget::new(59, None),
            Err(ValidationError::PaceOutOfRange { seconds_per_km: 59 })
        );
        assert!(PaceTarget::new(1201, None).is_err());
    }

    #[test]
    fn pace_range_must_be_ordered() {
        assert!(PaceTarget::new(285, Some(300)).is_ok());
        assert_eq!(
            PaceTarget::new(300, Some(285)),
            Err(ValidationError::PaceRangeInverted { min: 300, max: 285 })
        );
    }

    #[test]
    fn pace_string_zero_pads_seconds() {
        let pace = PaceTarget::new(305, None).unwrap();
        assert_eq!(pace.to_pace_string(), "5:05");
        assert_eq!(pace.to_string(), "5:05/km");
    }

    #[test]
    fn pace_range_displays_both_ends() {
        let pace = PaceTarget::new(285, Some(300)).unwrap();
        assert_eq!(pace.to_string(), "4:45-5:00/km");
    }

    #[test]
    fn heart_rate_bounds_are_enforced() {
        assert!(HeartRateTarget::new(40, None).is_ok());
        assert!(HeartRateTarget::new(220, Some(220)).is_ok());
        assert_eq!(
            HeartRateTarget::new(300, None),
            Err(ValidationError::HeartRateOutOfRange { bpm: 300 })
        );
        assert!(HeartRateTarget::new(150, Some(140)).is_err());
    }

    #[test]
    fn heart_rate_display() {
        let hr = HeartRateTarget::new(165, None).unwrap();
        assert_eq!(hr.to_string(), "165 bpm");

        let zone = HeartRateTarget::new(150, Some(160)).unwrap();
        assert_eq!(zone.to_string(), "150-160 bpm");
    }

    #[test]
    fn cadence_bounds_are_enforced() {
        assert!(CadenceTarget::new(180, None).is_ok());
        assert!(CadenceTarget::new(59, None).is_err());
        assert!(CadenceTarget::new(180, Some(170)).is_err());

        let cadence = CadenceTarget::new(170, Some(180)).unwrap();
        assert_eq!(cadence.to_string(), "170-180 spm");
    }
}
